//! `node_modules/.bin` lookup and `PATH` construction.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::Result;

/// `node_modules/.bin` of `dir` and of every ancestor, nearest first.
///
/// Directories are listed whether or not they exist; the OS skips missing
/// `PATH` entries on its own.
pub fn bin_dirs(dir: &Path) -> Vec<PathBuf> {
    dir.ancestors()
        .map(|ancestor| ancestor.join("node_modules").join(".bin"))
        .collect()
}

/// `PATH` with [`bin_dirs`] of `dir` in front of the inherited one.
pub fn path_with_bin_dirs(dir: &Path) -> Result<OsString> {
    let inherited = std::env::var_os("PATH").unwrap_or_default();
    let entries = bin_dirs(dir)
        .into_iter()
        .chain(std::env::split_paths(&inherited));

    let joined = std::env::join_paths(entries)
        .with_context(|| format!("Couldn't build PATH for {}", dir.display()))?;

    Ok(joined)
}

/// Find an installed binary called `name` in the nearest `node_modules/.bin`.
pub fn find_binary(dir: &Path, name: &str) -> Option<PathBuf> {
    if name.is_empty() || name.contains(['/', '\\']) {
        return None;
    }

    bin_dirs(dir).into_iter().find_map(|bin_dir| {
        candidate_names(name)
            .into_iter()
            .map(|candidate| bin_dir.join(candidate))
            .find(|path| path.is_file())
    })
}

fn candidate_names(name: &str) -> Vec<String> {
    if cfg!(target_os = "windows") {
        vec![
            format!("{}.cmd", name),
            format!("{}.exe", name),
            name.to_string(),
        ]
    } else {
        vec![name.to_string()]
    }
}
