//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing resolved commands

use std::cell::OnceCell;
use std::path::PathBuf;

use crate::cli::resolve::ResolvedCommand;
use crate::config::Settings;
use crate::detection::PackageManagerContext;
use crate::error::Result;
use crate::shell::ProcessResult;
use crate::ui::UserInterface;

use super::{AddCommand, HelpCommand, InstallCommand, RunCommand, VersionCommand};

/// Trait for command implementations.
///
/// Each resolved command has an implementation providing its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Mirror a finished child.
    pub fn from_process(result: &ProcessResult) -> Self {
        if result.success() {
            Self::success()
        } else {
            Self::failure(result.exit_code)
        }
    }
}

/// Dispatches resolved commands to their implementations.
pub struct CommandDispatcher {
    working_directory: PathBuf,
    settings: Settings,
    context: OnceCell<PackageManagerContext>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given working directory.
    pub fn new(working_directory: PathBuf, settings: Settings) -> Self {
        Self {
            working_directory,
            settings,
            context: OnceCell::new(),
        }
    }

    /// Dispatch and execute a command.
    ///
    /// Help and version never look at the filesystem. Everything else
    /// resolves the package manager context first.
    pub fn dispatch(
        &self,
        command: &ResolvedCommand,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        tracing::debug!("Dispatching {}", command.kind());

        match command {
            ResolvedCommand::Help { target } => HelpCommand::new(target.clone()).execute(ui),
            ResolvedCommand::Version => VersionCommand.execute(ui),
            ResolvedCommand::Install => InstallCommand::new(self.context()?).execute(ui),
            ResolvedCommand::Add { packages, flags } => {
                AddCommand::new(self.context()?, &self.settings, packages.clone(), *flags)
                    .execute(ui)
            }
            ResolvedCommand::Run { script, args }
            | ResolvedCommand::ImplicitRun { script, args } => {
                RunCommand::new(self.context()?, script.clone(), args.clone()).execute(ui)
            }
        }
    }

    /// The package manager context, resolved on first use.
    fn context(&self) -> Result<&PackageManagerContext> {
        if let Some(context) = self.context.get() {
            return Ok(context);
        }
        let context = PackageManagerContext::resolve(&self.working_directory)?;
        Ok(self.context.get_or_init(|| context))
    }
}
