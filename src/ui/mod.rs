//! Output to the user.
//!
//! This module provides:
//! - [`UserInterface`] trait so executors can be tested without a terminal
//! - [`TerminalUI`] writing styled lines to stdout and stderr
//! - [`MockUI`] capturing everything for assertions
//!
//! Child process output does not pass through here; the supervisor relays
//! it byte for byte.

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, NyTheme};

/// Trait for user-facing output.
pub trait UserInterface {
    /// Display a plain informational line.
    fn message(&mut self, msg: &str);

    /// Display an error.
    fn error(&mut self, msg: &str);

    /// Echo a command line that is about to run.
    fn command(&mut self, line: &str);
}
