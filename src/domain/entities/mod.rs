//! Domain Entities
//!
//! All entities are created fresh per build and discarded afterwards.

mod artifact;
mod extracted_content;
mod import_statement;
mod marker_validation;
mod merged_imports;
mod source_document;

pub use artifact::DeploymentArtifact;
pub use extracted_content::ExtractedContent;
pub use import_statement::{normalize_whitespace, ImportKind, ImportStatement, ImportWarning};
pub use marker_validation::{MarkerIssue, MarkerValidationResult};
pub use merged_imports::MergedImportSet;
pub use source_document::SourceDocument;
