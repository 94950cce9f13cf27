//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{BuildUseCase, CleanUseCase, ValidateUseCase};
use crate::domain::services::{BundlePipeline, PipelineSettings};
use crate::error::BundlerResult;
use crate::infrastructure::LocalFs;

/// Type alias for the concrete BuildUseCase with all dependencies
pub type ConcreteBuildUseCase = BuildUseCase<LocalFs>;

/// Type alias for the concrete ValidateUseCase with all dependencies
pub type ConcreteValidateUseCase = ValidateUseCase<LocalFs>;

/// Create a build use case over the local filesystem
///
/// Fails only when the configured shared module name is unusable.
pub fn create_build_use_case(settings: &PipelineSettings) -> BundlerResult<ConcreteBuildUseCase> {
    Ok(BuildUseCase::new(LocalFs::new(), BundlePipeline::new(settings)?))
}

pub fn create_validate_use_case(
    settings: &PipelineSettings,
) -> BundlerResult<ConcreteValidateUseCase> {
    Ok(ValidateUseCase::new(LocalFs::new(), BundlePipeline::new(settings)?))
}

pub fn create_clean_use_case() -> CleanUseCase<LocalFs> {
    CleanUseCase::new(LocalFs::new())
}
