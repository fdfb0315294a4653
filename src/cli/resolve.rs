//! Argument classification.
//!
//! [`resolve`] turns raw argv into exactly one [`ResolvedCommand`]. It is a
//! pure function: no filesystem access, no process spawning, and the same
//! argv always yields the same result.
//!
//! Classification is keyword-first:
//!
//! 1. no tokens at all means `install`
//! 2. a leading flag belongs to ny itself (`--help`, `--version`)
//! 3. `add`, `run` and `install` (and their one-letter aliases) select a
//!    subcommand
//! 4. anything else is the name of a script to run
//!
//! Once a script name has been consumed, every following token is data for
//! the child process, including `--help`.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use super::args::{AddArgs, Cli, Commands, RunArgs};
use crate::error::{NyError, Result};

/// Flags recognized by `ny add`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddFlags {
    /// Install as a dev dependency.
    pub dev: bool,
    /// Install into the workspace root.
    pub workspace_root: bool,
}

/// What the user asked ny to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedCommand {
    /// Install the project's dependencies (bare `ny`).
    Install,
    /// Add packages through the backend.
    Add {
        packages: Vec<String>,
        flags: AddFlags,
    },
    /// `ny run <script> [args...]`.
    Run { script: String, args: Vec<String> },
    /// `ny <script> [args...]`, same semantics as [`ResolvedCommand::Run`].
    ImplicitRun { script: String, args: Vec<String> },
    /// Print usage for ny or for one of its subcommands.
    Help { target: Option<String> },
    /// Print ny's version.
    Version,
}

impl ResolvedCommand {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Install => "install",
            Self::Add { .. } => "add",
            Self::Run { .. } => "run",
            Self::ImplicitRun { .. } => "implicit-run",
            Self::Help { .. } => "help",
            Self::Version => "version",
        }
    }
}

/// Classify argv (without the program name).
pub fn resolve(argv: &[String]) -> Result<ResolvedCommand> {
    let Some((first, rest)) = argv.split_first() else {
        return Ok(ResolvedCommand::Install);
    };

    match first.as_str() {
        "add" | "a" => parse_with_clap(argv, Some("add")),
        "install" | "i" => parse_with_clap(argv, Some("install")),
        "run" | "r" => resolve_run(argv, rest),
        flag if flag.starts_with('-') => resolve_flag(argv, rest),
        script => Ok(ResolvedCommand::ImplicitRun {
            script: script.to_string(),
            args: rest.to_vec(),
        }),
    }
}

/// Convert process arguments, rejecting tokens that are not valid UTF-8.
pub fn argv_from_os<I>(args: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string().map_err(|arg| {
                NyError::from(clap::Error::raw(
                    ErrorKind::InvalidUtf8,
                    format!(
                        "invalid UTF-8 was detected in argument '{}'\n",
                        arg.to_string_lossy()
                    ),
                ))
            })
        })
        .collect()
}

/// A leading flag is ny's own. `--help` and `--version` must stand alone.
fn resolve_flag(argv: &[String], rest: &[String]) -> Result<ResolvedCommand> {
    let command = parse_with_clap(argv, None)?;
    let standalone = matches!(command, ResolvedCommand::Help { .. } | ResolvedCommand::Version);

    match rest.first() {
        Some(extra) if standalone => Err(Cli::command()
            .error(
                ErrorKind::UnknownArgument,
                format!("unexpected argument '{}' found", extra),
            )
            .into()),
        _ => Ok(command),
    }
}

/// `run` stops interpreting tokens as soon as it has a script name.
///
/// Only a leading flag (`ny run --help`, `ny run -- script`) goes through
/// clap; the common case is taken verbatim.
fn resolve_run(argv: &[String], rest: &[String]) -> Result<ResolvedCommand> {
    match rest.split_first() {
        Some((script, args)) if !script.starts_with('-') => Ok(ResolvedCommand::Run {
            script: script.clone(),
            args: args.to_vec(),
        }),
        _ => parse_with_clap(argv, Some("run")),
    }
}

fn parse_with_clap(argv: &[String], target: Option<&str>) -> Result<ResolvedCommand> {
    let tokens = std::iter::once("ny").chain(argv.iter().map(String::as_str));

    match Cli::try_parse_from(tokens) {
        Ok(cli) => Ok(from_cli(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp => Ok(ResolvedCommand::Help {
                target: target.map(str::to_string),
            }),
            ErrorKind::DisplayVersion => Ok(ResolvedCommand::Version),
            _ => Err(err.into()),
        },
    }
}

fn from_cli(cli: Cli) -> ResolvedCommand {
    match cli.command {
        None | Some(Commands::Install) => ResolvedCommand::Install,
        Some(Commands::Run(RunArgs { script, args })) => ResolvedCommand::Run { script, args },
        Some(Commands::Add(AddArgs {
            packages,
            dev,
            workspace_root,
        })) => ResolvedCommand::Add {
            packages,
            flags: AddFlags {
                dev,
                workspace_root,
            },
        },
    }
}
