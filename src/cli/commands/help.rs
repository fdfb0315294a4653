//! `ny --help` and `ny --version`.

use clap::error::ErrorKind;
use clap::CommandFactory;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prints usage for ny or one of its subcommands.
pub struct HelpCommand {
    target: Option<String>,
}

impl HelpCommand {
    /// Create a help command; `target` names a subcommand.
    pub fn new(target: Option<String>) -> Self {
        Self { target }
    }

    /// The help text, exactly as clap renders it for `--help`.
    pub fn render(&self) -> String {
        let argv: Vec<&str> = std::iter::once("ny")
            .chain(self.target.as_deref())
            .chain(std::iter::once("--help"))
            .collect();

        match Cli::command().try_get_matches_from(argv) {
            Err(err) if err.kind() == ErrorKind::DisplayHelp => err.render().to_string(),
            _ => Cli::command().render_help().to_string(),
        }
    }
}

impl Command for HelpCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(self.render().trim_end());
        Ok(CommandResult::success())
    }
}

/// Prints `ny <version>`.
pub struct VersionCommand;

impl VersionCommand {
    /// The version line.
    pub fn render(&self) -> String {
        format!("ny {}", env!("CARGO_PKG_VERSION"))
    }
}

impl Command for VersionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&self.render());
        Ok(CommandResult::success())
    }
}
