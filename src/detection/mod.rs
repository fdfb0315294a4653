//! Package manager detection.

pub mod backend;
pub mod context;
pub mod file_detection;

pub use backend::{AddVocabulary, Backend, WorkspaceRoot, LOCKFILES};
pub use context::PackageManagerContext;
pub use file_detection::{any_file_exists, file_exists, find_in_parents};
