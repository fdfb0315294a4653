//! Runtime configuration.
//!
//! ny has no configuration file and no global flags; everything it can be
//! told comes from environment variables, read once at startup into
//! [`Settings`].

pub mod settings;

pub use settings::{Settings, DEFAULT_LOG_FILTER};
