//! Lambda Bundler - marker-based bundler for serverless function sources
//!
//! Each function source carries structural markers around its import block
//! and its function block. The bundler merges the function's imports with
//! those of a shared configuration module, embeds the shared module's
//! functions, and writes one self-contained artifact per target that needs
//! no import resolution at runtime.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildResult, BuildUseCase, BundleLayout, CleanUseCase, ValidateUseCase};
pub use config::Config;
pub use domain::services::{BundlePipeline, PipelineSettings};
pub use error::{BundlerError, BundlerResult};
pub use infrastructure::LocalFs;
