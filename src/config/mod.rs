//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BUNDLER_*)
//! 3. Workspace config (`bundler.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::CONFIG_FILE_NAME;
pub use types::{BundleConfig, ClassifierConfig, ColorMode, Config, OutputConfig, TargetEntry};
