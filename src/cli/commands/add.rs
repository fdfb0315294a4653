//! `ny add`.
//!
//! Adds packages through the detected backend. In a TypeScript project it
//! then adds the DefinitelyTyped companions of packages that ship no
//! declarations of their own.

use std::path::Path;

use crate::cli::resolve::AddFlags;
use crate::config::Settings;
use crate::detection::PackageManagerContext;
use crate::error::Result;
use crate::shell::{spawn, Relay, SpawnOptions};
use crate::types::{is_typescript_project, plan_types, NpmRegistry};
use crate::ui::UserInterface;

use super::command_line;
use super::dispatcher::{Command, CommandResult};

/// Adds packages with the detected backend.
pub struct AddCommand<'a> {
    context: &'a PackageManagerContext,
    settings: &'a Settings,
    packages: Vec<String>,
    flags: AddFlags,
}

impl<'a> AddCommand<'a> {
    /// Create an add command.
    pub fn new(
        context: &'a PackageManagerContext,
        settings: &'a Settings,
        packages: Vec<String>,
        flags: AddFlags,
    ) -> Self {
        Self {
            context,
            settings,
            packages,
            flags,
        }
    }

    fn install_types(&self, program: &str, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let cwd = &self.context.working_directory;
        let registry = NpmRegistry::new(self.settings.registry.as_str())?;
        let plan = plan_types(cwd, &self.packages, &registry);
        if plan.is_empty() {
            tracing::debug!("No types packages to add");
            return Ok(CommandResult::success());
        }

        ui.message(&format!(
            "Installing types for {}: {}",
            plan.packages.join(", "),
            plan.types_packages.join(", ")
        ));

        let flags = AddFlags {
            dev: true,
            workspace_root: self.flags.workspace_root,
        };
        let args = self.context.add_args(&plan.types_packages, flags)?;
        let options = SpawnOptions {
            stdout: Relay::Silent,
            ..Default::default()
        };

        self.run_backend(program, &args, cwd, &options, ui)
    }

    fn run_backend(
        &self,
        program: &str,
        args: &[String],
        cwd: &Path,
        options: &SpawnOptions,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        ui.command(&command_line(program, args));
        let result = spawn(program, args, cwd, options)?;
        Ok(CommandResult::from_process(&result))
    }
}

impl Command for AddCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let args = self.context.add_args(&self.packages, self.flags)?;
        let program = self.context.require_program()?;

        let result = self.run_backend(
            program,
            &args,
            &self.context.working_directory,
            &SpawnOptions::default(),
            ui,
        )?;
        if !result.success {
            return Ok(result);
        }

        if !self.settings.install_types {
            tracing::debug!("Types installation disabled");
            return Ok(result);
        }
        if !is_typescript_project(&self.context.working_directory) {
            return Ok(result);
        }

        self.install_types(program, ui)
    }
}
