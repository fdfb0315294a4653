//! Error types for ny.
//!
//! This module defines [`NyError`], the error type used throughout the
//! dispatcher, and a [`Result`] alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every error detected before a child is spawned is terminal
//! - A child exiting non-zero is *not* an error; its code is relayed as-is
//! - Use `anyhow::Error` (via `NyError::Other`) for unexpected failures

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ny operations.
#[derive(Debug, Error)]
pub enum NyError {
    /// The arguments could not be mapped to any command.
    ///
    /// `message` is the usage error exactly as clap rendered it.
    #[error("{message}")]
    Classification { message: String },

    /// The working directory is missing or unreadable.
    #[error("Invalid working directory {path}: {message}")]
    Context { path: PathBuf, message: String },

    /// No lockfile was found, so there is no backend to delegate to.
    #[error("Couldn't find any lockfile inside {path} or any of its parents")]
    NoBackend { path: PathBuf },

    /// Neither a declared script nor an installed binary has this name.
    #[error("unknown script or binary: {name}")]
    UnknownTarget { name: String },

    /// A child process could not be started.
    #[error("Couldn't run command: {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The package.json manifest could not be parsed.
    #[error("Couldn't parse {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    /// The backend has no equivalent for a requested flag.
    #[error("{backend} doesn't support the {flag} flag")]
    UnsupportedFlag { backend: String, flag: String },

    /// The registry client could not be set up.
    #[error("Registry error: {message}")]
    Registry { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NyError {
    /// Exit code ny uses when it fails with this error.
    ///
    /// Usage errors follow clap's convention of `2`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Classification { .. } => 2,
            _ => 1,
        }
    }

    /// Whether the message is already fully rendered (clap usage errors).
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Classification { .. })
    }
}

impl From<clap::Error> for NyError {
    fn from(err: clap::Error) -> Self {
        Self::Classification {
            message: err.render().to_string(),
        }
    }
}

/// Result type alias for ny operations.
pub type Result<T> = std::result::Result<T, NyError>;
