//! Error types for the bundler
//!
//! Library errors use `thiserror`. Per-target build failures are not errors
//! in this sense; they are collected into `application::build::TargetError`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bundler operations
pub type BundlerResult<T> = Result<T, BundlerError>;

/// Main error type for bundler operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {}: {message}", .file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Source directory does not exist
    #[error("source directory not found: {}", .path.display())]
    SourceDirNotFound { path: PathBuf },

    /// Shared module file does not exist
    #[error("shared module not found: {}", .path.display())]
    SharedModuleNotFound { path: PathBuf },

    /// Shared module name is not a valid identifier
    #[error("invalid shared module name '{name}': {reason}")]
    InvalidSharedModule { name: String, reason: String },

    /// A target name was requested that is not configured
    #[error("unknown target '{name}'")]
    UnknownTarget { name: String },
}
