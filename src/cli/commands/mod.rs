//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! [`resolve`](crate::cli::resolve::resolve) classifies argv first, then
//! [`CommandDispatcher`] routes the [`ResolvedCommand`](crate::cli::ResolvedCommand)
//! to its executor. Executors that start a child report the child's exit
//! code as their own.

pub mod add;
pub mod dispatcher;
pub mod help;
pub mod install;
pub mod run;

pub use add::AddCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use help::{HelpCommand, VersionCommand};
pub use install::InstallCommand;
pub use run::RunCommand;

/// A command line as echoed before it runs: `program arg1 arg2`.
pub(crate) fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
