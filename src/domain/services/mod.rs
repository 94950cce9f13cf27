//! Domain Services
//!
//! Pure text-analysis services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.
//!
//! The stages are composed once into a [`BundlePipeline`]; use cases are
//! generic over the stage traits in `domain::ports::pipeline`.

mod assembler;
mod content_extractor;
mod import_classifier;
mod import_merger;
mod import_parser;
mod marker_scanner;
mod self_check;
mod syntax_check;

pub use assembler::{SectionAssembler, EMBEDDED_CODE_END, EMBEDDED_CODE_START};
pub use content_extractor::{ContentExtractor, SHARED_IMPORTS_BANNER};
pub use import_classifier::ImportClassifier;
pub use import_merger::{render_from, ModuleImportMerger, MAX_LINE_LENGTH};
pub use import_parser::{strip_comment, ContinuationBuffer, ImportParser, ParseOutcome};
pub use marker_scanner::MarkerScanner;
pub use self_check::{ArtifactSelfCheck, SelfCheckReport};
pub use syntax_check::{check_syntax, SyntaxIssue};

use crate::domain::value_objects::{SharedImportPatterns, DEFAULT_SHARED_MODULE};
use crate::error::BundlerResult;

/// Inputs needed to build the default pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    pub shared_module: String,
    pub third_party: Vec<String>,
    pub standard_library: Vec<String>,
    pub shared_aliases: Vec<String>,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            shared_module: DEFAULT_SHARED_MODULE.to_string(),
            third_party: Vec::new(),
            standard_library: Vec::new(),
            shared_aliases: Vec::new(),
        }
    }
}

/// The four stages plus the artifact self-check, composed statically
#[derive(Debug, Clone)]
pub struct BundlePipeline<V = MarkerScanner, X = ContentExtractor, A = SectionAssembler> {
    pub validator: V,
    pub extractor: X,
    pub assembler: A,
    pub self_check: ArtifactSelfCheck,
}

impl BundlePipeline {
    /// Build the default stages for `settings`.
    ///
    /// Fails only when the shared module name is not a valid identifier.
    pub fn new(settings: &PipelineSettings) -> BundlerResult<Self> {
        let patterns = SharedImportPatterns::new(&settings.shared_module)?;
        let classifier = ImportClassifier::new(&settings.shared_module)
            .with_third_party(settings.third_party.iter().cloned())
            .with_standard_library(settings.standard_library.iter().cloned())
            .with_shared_aliases(settings.shared_aliases.iter().cloned());

        Ok(Self {
            validator: MarkerScanner::new(),
            extractor: ContentExtractor::new(ImportParser::new(classifier), patterns.clone()),
            assembler: SectionAssembler::new(ModuleImportMerger::new()),
            self_check: ArtifactSelfCheck::new(patterns),
        })
    }
}
