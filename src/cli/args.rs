//! CLI argument definitions.
//!
//! These clap definitions own the help text and the parsing of `add` flags.
//! Which definition applies to a given argv is decided beforehand by
//! [`resolve`](super::resolve::resolve), because clap alone cannot tell a
//! script name from a subcommand.
//!
//! The top-level [`Cli`] deliberately has no global options, so that its
//! usage line stays `Usage: ny [COMMAND]`.

use clap::{Parser, Subcommand};

/// ny - run scripts and manage dependencies with whichever package manager
/// the project uses.
#[derive(Debug, PartialEq, Parser)]
#[command(name = "ny")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
///
/// Any other first word is treated as a script name.
#[derive(Debug, PartialEq, Subcommand)]
pub enum Commands {
    /// Install dependencies (default if no command specified)
    #[command(alias("i"))]
    Install,

    /// Run a package.json script or an installed binary
    #[command(alias("r"))]
    Run(RunArgs),

    /// Add dependencies
    #[command(alias("a"))]
    Add(AddArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, PartialEq, clap::Args)]
pub struct RunArgs {
    /// Name of a script from package.json or of a binary in node_modules/.bin
    #[arg(required = true)]
    pub script: String,

    /// Extra arguments passed through to the script untouched
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, PartialEq, clap::Args)]
pub struct AddArgs {
    /// Names of dependencies to add
    #[arg(required = true)]
    pub packages: Vec<String>,

    /// Install as dev dependency
    #[arg(short, long, alias = "save-dev", short_alias = 'D')]
    pub dev: bool,

    /// Add the dependency to the workspace root
    #[arg(short, long, short_alias = 'W')]
    pub workspace_root: bool,
}
