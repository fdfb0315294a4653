//! Command-line interface for ny.
//!
//! This module provides argument classification and the command
//! implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`resolve`] - Classification of raw argv into a [`ResolvedCommand`]
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;
pub mod resolve;

pub use args::{AddArgs, Cli, Commands, RunArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
pub use resolve::{argv_from_os, resolve, AddFlags, ResolvedCommand};
