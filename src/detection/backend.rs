//! Package manager backends.
//!
//! A [`Backend`] knows its executable and how to phrase `install` and `add`
//! for it. Which one governs a project is decided by its lockfile.

use std::fmt;

/// The package manager a project is governed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Npm,
    Yarn,
    Pnpm,
    Bun,
    /// No lockfile was found.
    Unknown,
}

/// Marker files, checked in this order within each directory.
pub const LOCKFILES: &[(&str, Backend)] = &[
    ("package-lock.json", Backend::Npm),
    ("npm-shrinkwrap.json", Backend::Npm),
    ("yarn.lock", Backend::Yarn),
    ("pnpm-lock.yaml", Backend::Pnpm),
    ("bun.lockb", Backend::Bun),
    ("bun.lock", Backend::Bun),
];

/// How `--workspace-root` is phrased for a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceRoot {
    /// Passed as this flag.
    Flag(&'static str),
    /// The workspace root is already the install target.
    Implicit,
    /// The backend has no way to target the workspace root.
    Unsupported,
}

/// The verb and flags a backend phrases `add` with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddVocabulary {
    pub verb: &'static str,
    pub dev_flag: &'static str,
    pub workspace_root: WorkspaceRoot,
}

impl Backend {
    /// Backend selected by a lockfile name.
    pub fn from_lockfile(name: &str) -> Option<Backend> {
        LOCKFILES
            .iter()
            .find(|(file, _)| *file == name)
            .map(|(_, backend)| *backend)
    }

    /// Executable name. `None` for [`Backend::Unknown`].
    pub fn program(&self) -> Option<&'static str> {
        match self {
            Backend::Npm => Some("npm"),
            Backend::Yarn => Some("yarn"),
            Backend::Pnpm => Some("pnpm"),
            Backend::Bun => Some("bun"),
            Backend::Unknown => None,
        }
    }

    /// Arguments that install the project's dependencies.
    pub fn install_args(&self) -> Vec<String> {
        vec!["install".to_string()]
    }

    /// How `add` is phrased. `None` for [`Backend::Unknown`].
    pub fn add_vocabulary(&self) -> Option<AddVocabulary> {
        let (verb, dev_flag, workspace_root) = match self {
            Backend::Npm => ("install", "--save-dev", WorkspaceRoot::Implicit),
            Backend::Yarn => ("add", "-D", WorkspaceRoot::Flag("-W")),
            Backend::Pnpm => ("add", "-D", WorkspaceRoot::Flag("-w")),
            Backend::Bun => ("add", "-D", WorkspaceRoot::Unsupported),
            Backend::Unknown => return None,
        };
        Some(AddVocabulary {
            verb,
            dev_flag,
            workspace_root,
        })
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program().unwrap_or("unknown"))
    }
}
