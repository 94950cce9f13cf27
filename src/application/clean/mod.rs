//! Clean Use Case
//!
//! Removes previously generated artifacts.
//!
//! This module handles:
//! - Resolving each target's artifact path
//! - Deleting artifacts that exist (no validation, no signature checks)
//! - Pruning per-target directories left empty inside the deployment dir

mod options;
mod result;
mod use_case;

pub use options::CleanOptions;
pub use result::{CleanResult, SkipReason, SkippedFile};
pub use use_case::CleanUseCase;
