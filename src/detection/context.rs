//! Package manager context resolution.

use std::path::{Path, PathBuf};

use super::backend::{Backend, WorkspaceRoot, LOCKFILES};
use super::file_detection::any_file_exists;
use crate::cli::resolve::AddFlags;
use crate::error::{NyError, Result};

/// Where ny runs and which backend governs that place.
///
/// Resolved once per invocation and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManagerContext {
    /// The directory ny was invoked in.
    pub working_directory: PathBuf,
    /// Backend selected by the nearest lockfile.
    pub backend: Backend,
    /// The lockfile that selected the backend.
    pub lockfile: Option<PathBuf>,
}

impl PackageManagerContext {
    /// Resolve the context for `cwd`.
    ///
    /// Walks from `cwd` towards the filesystem root and stops at the first
    /// directory containing a lockfile. Finding none is not an error; the
    /// backend is then [`Backend::Unknown`].
    pub fn resolve(cwd: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(cwd).map_err(|e| NyError::Context {
            path: cwd.to_path_buf(),
            message: e.to_string(),
        })?;
        if !metadata.is_dir() {
            return Err(NyError::Context {
                path: cwd.to_path_buf(),
                message: "not a directory".to_string(),
            });
        }

        let names: Vec<&str> = LOCKFILES.iter().map(|(name, _)| *name).collect();
        let found = cwd.ancestors().find_map(|dir| {
            any_file_exists(dir, &names).map(|name| (dir.join(name), name))
        });

        let context = match found {
            Some((lockfile, name)) => Self {
                working_directory: cwd.to_path_buf(),
                backend: Backend::from_lockfile(name).unwrap_or(Backend::Unknown),
                lockfile: Some(lockfile),
            },
            None => Self {
                working_directory: cwd.to_path_buf(),
                backend: Backend::Unknown,
                lockfile: None,
            },
        };

        tracing::debug!(
            "Resolved backend {} for {} (lockfile: {:?})",
            context.backend,
            cwd.display(),
            context.lockfile
        );

        Ok(context)
    }

    /// The backend, or an error if none was detected.
    pub fn require_backend(&self) -> Result<Backend> {
        match self.backend {
            Backend::Unknown => Err(self.no_backend()),
            backend => Ok(backend),
        }
    }

    /// Executable of the backend, or an error if none was detected.
    pub fn require_program(&self) -> Result<&'static str> {
        self.backend.program().ok_or_else(|| self.no_backend())
    }

    /// Arguments that add `packages` with the backend's vocabulary.
    pub fn add_args(&self, packages: &[String], flags: AddFlags) -> Result<Vec<String>> {
        let vocabulary = self
            .backend
            .add_vocabulary()
            .ok_or_else(|| self.no_backend())?;

        let mut args = vec![vocabulary.verb.to_string()];
        if flags.dev {
            args.push(vocabulary.dev_flag.to_string());
        }
        if flags.workspace_root {
            match vocabulary.workspace_root {
                WorkspaceRoot::Flag(flag) => args.push(flag.to_string()),
                WorkspaceRoot::Implicit => {}
                WorkspaceRoot::Unsupported => {
                    return Err(NyError::UnsupportedFlag {
                        backend: self.backend.to_string(),
                        flag: "--workspace-root".to_string(),
                    })
                }
            }
        }
        args.extend(packages.iter().cloned());

        Ok(args)
    }

    fn no_backend(&self) -> NyError {
        NyError::NoBackend {
            path: self.working_directory.clone(),
        }
    }
}
