//! Fixtures shared by the integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use tempfile::TempDir;

/// A `ny` command running in `dir` with a quiet, deterministic environment.
#[allow(deprecated)]
pub fn ny(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("ny"));
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("NY_LOG")
        .env_remove("RUST_LOG")
        .env_remove("NY_REGISTRY")
        .env_remove("NY_SKIP_TYPES")
        .env_remove("npm_config_registry");
    cmd
}

/// A temp project with the given package.json contents.
pub fn project(package_json: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), package_json).unwrap();
    temp
}

/// A temp project with the given package.json contents and a yarn lockfile.
pub fn locked_project(package_json: &str) -> TempDir {
    let temp = project(package_json);
    fs::write(temp.path().join("yarn.lock"), "").unwrap();
    temp
}

/// Write an executable shell script.
#[cfg(unix)]
pub fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// Install a fake backend called `name` into `bin_dir`.
///
/// It appends its argv to `<bin_dir>/<name>.log`, prints `fake <name>
/// output` and exits with `$FAKE_EXIT` (default 0).
#[cfg(unix)]
pub fn fake_backend(bin_dir: &Path, name: &str) -> PathBuf {
    let log = bin_dir.join(format!("{}.log", name));
    write_script(
        &bin_dir.join(name),
        &format!(
            "echo \"$*\" >> '{}'\necho 'fake {} output'\nexit ${{FAKE_EXIT:-0}}",
            log.display(),
            name
        ),
    );
    log
}

/// `PATH` with `dir` in front of the inherited one.
pub fn path_with(dir: &Path) -> std::ffi::OsString {
    let inherited = std::env::var_os("PATH").unwrap_or_default();
    let entries = std::iter::once(dir.to_path_buf()).chain(std::env::split_paths(&inherited));
    std::env::join_paths(entries).unwrap()
}

/// Lines a fake backend recorded, or none if it never ran.
pub fn recorded(log: &Path) -> Vec<String> {
    fs::read_to_string(log)
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
