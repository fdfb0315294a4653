//! ny - one front end for npm, yarn, pnpm and bun.
//!
//! ny looks at the lockfile of the current project and forwards `install`
//! and `add` to the package manager that owns it. Anything else on the
//! command line names a package.json script or an installed binary, which
//! ny runs itself with arguments passed through untouched.
//!
//! # Modules
//!
//! - [`cli`] - Argument classification and command implementations
//! - [`config`] - Settings read from the environment
//! - [`detection`] - Lockfile detection and backend selection
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - package.json loading
//! - [`shell`] - Child process supervision
//! - [`types`] - `@types/*` companion package planning
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use ny::cli::{resolve, ResolvedCommand};
//!
//! let argv = vec!["test".to_string(), "--watch".to_string()];
//! assert_eq!(
//!     resolve(&argv).unwrap(),
//!     ResolvedCommand::ImplicitRun {
//!         script: "test".to_string(),
//!         args: vec!["--watch".to_string()],
//!     }
//! );
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod manifest;
pub mod shell;
pub mod types;
pub mod ui;

pub use error::{NyError, Result};
