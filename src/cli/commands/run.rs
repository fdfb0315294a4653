//! `ny run <script>` and `ny <script>`.
//!
//! A script declared in the nearest package.json wins over an installed
//! binary of the same name. Extra arguments reach either one unmodified.

use std::collections::HashMap;
use std::path::Path;

use crate::detection::PackageManagerContext;
use crate::error::{NyError, Result};
use crate::manifest::Manifest;
use crate::shell::{find_binary, path_with_bin_dirs, shell_invocation, spawn, SpawnOptions};
use crate::ui::UserInterface;

use super::command_line;
use super::dispatcher::{Command, CommandResult};

/// Runs a script or an installed binary.
pub struct RunCommand<'a> {
    context: &'a PackageManagerContext,
    script: String,
    args: Vec<String>,
}

impl<'a> RunCommand<'a> {
    /// Create a run command.
    pub fn new(context: &'a PackageManagerContext, script: String, args: Vec<String>) -> Self {
        Self {
            context,
            script,
            args,
        }
    }
}

/// Spawn options that put `node_modules/.bin` of `dir` and its ancestors on `PATH`.
fn options_for(dir: &Path) -> Result<SpawnOptions> {
    let path = path_with_bin_dirs(dir)?;
    Ok(SpawnOptions {
        env: HashMap::from([("PATH".to_string(), path)]),
        ..Default::default()
    })
}

impl Command for RunCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.context.require_backend()?;
        let cwd = &self.context.working_directory;
        let manifest = Manifest::find(cwd)?;

        let declared = manifest
            .as_ref()
            .and_then(|m| m.package.script(&self.script).map(|text| (m.dir(), text)));

        if let Some((dir, text)) = declared {
            tracing::debug!("Running script {:?} from {}", self.script, dir.display());
            ui.command(&command_line(text, &self.args));

            let (program, args) = shell_invocation(text, &self.script, &self.args);
            let result = spawn(program, &args, dir, &options_for(dir)?)?;
            return Ok(CommandResult::from_process(&result));
        }

        if let Some(binary) = find_binary(cwd, &self.script) {
            tracing::debug!("Running binary {}", binary.display());
            ui.command(&command_line(&self.script, &self.args));

            let result = spawn(&binary, &self.args, cwd, &options_for(cwd)?)?;
            return Ok(CommandResult::from_process(&result));
        }

        Err(NyError::UnknownTarget {
            name: self.script.clone(),
        })
    }
}
