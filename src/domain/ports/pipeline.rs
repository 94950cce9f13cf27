//! Pipeline stage ports
//!
//! The four text-analysis stages behind fixed traits. Use cases are generic
//! over them and the concrete stages are composed once at start-up
//! (see `domain::services::BundlePipeline`).

use crate::domain::entities::{
    ExtractedContent, ImportStatement, MarkerValidationResult, MergedImportSet, SourceDocument,
};
use crate::domain::value_objects::DocumentKind;

/// Structural marker validation
pub trait MarkerValidator {
    /// Exhaustive check: every problem in the document is reported in one call.
    fn validate(&self, document: &SourceDocument, kind: DocumentKind) -> MarkerValidationResult;
}

/// Splits a document into header / imports / functions / shared imports
pub trait SectionExtractor {
    /// Best effort on broken input; never fails.
    fn extract(&self, document: &SourceDocument) -> ExtractedContent;
}

/// Combines a target's imports with the shared module's
pub trait ImportMerger {
    fn merge(&self, target: &[ImportStatement], shared: &[ImportStatement]) -> MergedImportSet;
}

/// Composes the final artifact text
pub trait ArtifactAssembler {
    fn assemble(&self, target: &ExtractedContent, shared: &ExtractedContent) -> String;
}
