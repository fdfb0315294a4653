//! `ny` / `ny install`.

use crate::detection::PackageManagerContext;
use crate::error::Result;
use crate::shell::{spawn, SpawnOptions};
use crate::ui::UserInterface;

use super::command_line;
use super::dispatcher::{Command, CommandResult};

/// Installs the project's dependencies with the detected backend.
pub struct InstallCommand<'a> {
    context: &'a PackageManagerContext,
}

impl<'a> InstallCommand<'a> {
    /// Create an install command for `context`.
    pub fn new(context: &'a PackageManagerContext) -> Self {
        Self { context }
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let program = self.context.require_program()?;
        let args = self.context.backend.install_args();

        ui.command(&command_line(program, &args));
        let result = spawn(
            program,
            &args,
            &self.context.working_directory,
            &SpawnOptions::default(),
        )?;

        Ok(CommandResult::from_process(&result))
    }
}
