//! Build Use Case
//!
//! Turns each target's source plus the shared module into one deployment
//! artifact.
//!
//! This module handles:
//! - Validating markers in every source before touching the output
//! - Merging imports and embedding the shared functions
//! - Skipping artifacts whose content is unchanged
//! - Re-reading and self-checking every artifact after writing

mod result;
mod use_case;


pub use result::{BuildResult, FileWarning, TargetError, TargetReport, TargetStatus};
pub use use_case::BuildUseCase;
