//! Validate Use Case
//!
//! Runs the marker scanner over targets and/or the shared module without
//! writing anything. `preview` additionally extracts and assembles one target
//! in memory.

mod options;
mod result;
mod use_case;


pub use options::ValidateScope;
pub use result::{FileValidation, PreviewResult, PreviewSummary, ValidateResult};
pub use use_case::ValidateUseCase;
