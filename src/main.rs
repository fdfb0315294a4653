//! ny CLI entry point.

use std::process::ExitCode;

use ny::cli::{argv_from_os, resolve, CommandDispatcher};
use ny::config::Settings;
use ny::ui::{TerminalUI, UserInterface};
use ny::{NyError, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `NY_LOG` environment variable (if set)
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so they never mix with a child's stdout.
fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_new(&settings.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(ny::config::DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn run(argv: &[String], settings: Settings, ui: &mut dyn UserInterface) -> Result<i32> {
    let command = resolve(argv)?;
    tracing::debug!("Resolved {:?} to {:?}", argv, command);

    let cwd = std::env::current_dir().map_err(|e| NyError::Context {
        path: ".".into(),
        message: e.to_string(),
    })?;

    let dispatcher = CommandDispatcher::new(cwd, settings);
    let result = dispatcher.dispatch(&command, ui)?;

    Ok(result.exit_code)
}

fn main() -> ExitCode {
    let settings = Settings::from_env();
    init_tracing(&settings);

    let mut ui = TerminalUI::new(settings.color);

    let outcome = argv_from_os(std::env::args_os().skip(1))
        .and_then(|argv| run(&argv, settings, &mut ui));
    let code = match outcome {
        Ok(code) => code,
        Err(e) if e.is_usage() => {
            // Already rendered by clap, including its `error:` prefix.
            eprint!("{}", e);
            e.exit_code()
        }
        Err(e) => {
            ui.error(&e.to_string());
            e.exit_code()
        }
    };

    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
