//! Child process supervision.
//!
//! [`spawn`] starts one child with an exact argv, relays its output live
//! while capturing it, and reports the exit code. stdout and stderr are
//! drained on two scoped threads so neither pipe can fill up and stall the
//! child. At most [`CAPTURE_LIMIT`] bytes of each stream are kept.

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;

use super::signals::SignalGuard;
use crate::error::{NyError, Result};

/// Bytes kept per stream. Output past this is still relayed and drained.
pub const CAPTURE_LIMIT: usize = 1024 * 1024;

/// Output and exit status of a finished child.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessResult {
    /// The first [`CAPTURE_LIMIT`] bytes the child wrote to stdout.
    pub stdout: Vec<u8>,
    /// The first [`CAPTURE_LIMIT`] bytes the child wrote to stderr.
    pub stderr: Vec<u8>,
    /// Exit code; `128 + signal` if the child was killed by a signal.
    pub exit_code: i32,
}

impl ProcessResult {
    /// Whether the child exited with 0.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// What to do with a child stream besides capturing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Relay {
    /// Copy to ny's own stream as it arrives.
    #[default]
    Live,
    /// Capture only.
    Silent,
}

/// Options for [`spawn`].
#[derive(Debug, Clone, Default)]
pub struct SpawnOptions {
    /// Environment variables (merged with ny's own environment).
    pub env: HashMap<String, OsString>,

    /// Relay policy for stdout.
    pub stdout: Relay,

    /// Relay policy for stderr.
    pub stderr: Relay,
}

/// Run `program` with `args` in `cwd` and wait for it.
///
/// Arguments are handed to the OS as-is; nothing is re-parsed by a shell.
/// A non-zero exit is reported through [`ProcessResult::exit_code`], not as
/// an error.
pub fn spawn(
    program: impl AsRef<OsStr>,
    args: &[String],
    cwd: &Path,
    options: &SpawnOptions,
) -> Result<ProcessResult> {
    let program = program.as_ref();
    tracing::debug!("Spawning {:?} {:?} in {}", program, args, cwd.display());

    let mut cmd = Command::new(program);
    cmd.args(args)
        .current_dir(cwd)
        .envs(&options.env)
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|source| NyError::Spawn {
        program: program.to_string_lossy().to_string(),
        source,
    })?;

    let _signals = SignalGuard::install(child.id());

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let relay_stdout = options.stdout == Relay::Live;
    let relay_stderr = options.stderr == Relay::Live;

    let (stdout, stderr, status) = thread::scope(|s| {
        let stdout_handle = s.spawn(move || match stdout {
            Some(pipe) => drain(pipe, relay_stdout.then(io::stdout)),
            None => Vec::new(),
        });
        let stderr_handle = s.spawn(move || match stderr {
            Some(pipe) => drain(pipe, relay_stderr.then(io::stderr)),
            None => Vec::new(),
        });

        let status = child.wait();

        (
            stdout_handle.join().unwrap_or_default(),
            stderr_handle.join().unwrap_or_default(),
            status,
        )
    });

    let exit_code = exit_code(status?);
    tracing::debug!("{:?} exited with {}", program, exit_code);

    Ok(ProcessResult {
        stdout,
        stderr,
        exit_code,
    })
}

/// Build the argv that runs a package.json script through the system shell.
///
/// `args` become the script's positional parameters, so each one reaches
/// the script as a separate, unmodified word.
pub fn shell_invocation(script: &str, name: &str, args: &[String]) -> (String, Vec<String>) {
    if cfg!(target_os = "windows") {
        let mut line = script.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        ("cmd".to_string(), vec!["/C".to_string(), line])
    } else {
        let mut argv = vec![
            "-c".to_string(),
            format!("{} \"$@\"", script),
            name.to_string(),
        ];
        argv.extend(args.iter().cloned());
        ("sh".to_string(), argv)
    }
}

fn drain<R: Read, W: Write>(mut reader: R, mut sink: Option<W>) -> Vec<u8> {
    let mut captured = Vec::new();
    let mut buf = [0u8; 8192];

    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                if let Some(sink) = sink.as_mut() {
                    // a closed ny stdout must not stop the drain
                    let _ = sink.write_all(&buf[..n]).and_then(|_| sink.flush());
                }
                let keep = n.min(CAPTURE_LIMIT - captured.len());
                captured.extend_from_slice(&buf[..keep]);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(_) => break,
        }
    }

    captured
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
