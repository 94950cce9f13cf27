//! Application Layer
//!
//! Use cases that orchestrate the bundling flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain text-analysis rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - scan, extract, merge, assemble, write and self-check each target
//! - `ValidateUseCase` - scan documents and preview a target without writing
//! - `CleanUseCase` - remove generated artifacts
//!
//! `BundleLayout` resolves target names to (source, output) paths.

pub mod build;
pub mod clean;
pub mod layout;
pub mod validate;

#[cfg(test)]
pub(crate) mod testing;

pub use build::{BuildResult, BuildUseCase, FileWarning, TargetError, TargetReport, TargetStatus};
pub use clean::{CleanOptions, CleanResult, CleanUseCase, SkipReason, SkippedFile};
pub use layout::{BuildTarget, BundleLayout, TargetSpec, DEFAULT_ARTIFACT_NAME};
pub use validate::{
    FileValidation, PreviewResult, PreviewSummary, ValidateResult, ValidateScope, ValidateUseCase,
};
