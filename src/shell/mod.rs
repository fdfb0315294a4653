//! Child process execution.

pub mod command;
pub mod path;
pub mod signals;

pub use command::{shell_invocation, spawn, ProcessResult, Relay, SpawnOptions, CAPTURE_LIMIT};
pub use path::{bin_dirs, find_binary, path_with_bin_dirs};
pub use signals::SignalGuard;
