//! Validate Use Case

use std::path::Path;

use tracing::{debug, info};

use crate::application::build::FileWarning;
use crate::application::layout::BuildTarget;
use crate::domain::entities::{DeploymentArtifact, SourceDocument};
use crate::domain::ports::{ArtifactAssembler, FileSystem, MarkerValidator, SectionExtractor};
use crate::domain::services::{BundlePipeline, ContentExtractor, MarkerScanner, SectionAssembler};
use crate::domain::value_objects::DocumentKind;

use super::result::{FileValidation, PreviewResult, PreviewSummary, ValidateResult};

/// Validate use case - scans documents, never writes
pub struct ValidateUseCase<FS, V = MarkerScanner, X = ContentExtractor, A = SectionAssembler>
where
    FS: FileSystem,
{
    fs: FS,
    pipeline: BundlePipeline<V, X, A>,
}

impl<FS, V, X, A> ValidateUseCase<FS, V, X, A>
where
    FS: FileSystem,
    V: MarkerValidator,
    X: SectionExtractor,
    A: ArtifactAssembler,
{
    pub fn new(fs: FS, pipeline: BundlePipeline<V, X, A>) -> Self {
        Self { fs, pipeline }
    }

    pub fn fs(&self) -> &FS {
        &self.fs
    }

    /// Scan every target as a function document and the shared module, if given
    pub fn execute(&self, targets: &[BuildTarget], shared_path: Option<&Path>) -> ValidateResult {
        let mut result = ValidateResult::new();
        for target in targets {
            result.add(self.scan(&target.source_path, DocumentKind::Function).0);
        }
        if let Some(shared_path) = shared_path {
            result.add(self.scan(shared_path, DocumentKind::Shared).0);
        }
        info!(
            files = result.files.len(),
            invalid = result.invalid_count(),
            "validate finished"
        );
        result
    }

    /// Scan, extract and assemble one target without writing it
    pub fn preview(&self, target: &BuildTarget, shared_path: &Path) -> PreviewResult {
        let (target_check, target_doc) = self.scan(&target.source_path, DocumentKind::Function);
        let (shared_check, shared_doc) = self.scan(shared_path, DocumentKind::Shared);
        let ready = target_check.is_valid() && shared_check.is_valid();

        let mut validation = ValidateResult::new();
        validation.add(target_check);
        validation.add(shared_check);

        let (Some(target_doc), Some(shared_doc)) = (target_doc, shared_doc) else {
            return PreviewResult {
                validation,
                artifact: None,
                summary: None,
                warnings: Vec::new(),
            };
        };

        let target_content = self.pipeline.extractor.extract(&target_doc);
        let shared_content = self.pipeline.extractor.extract(&shared_doc);
        let warnings = target_content
            .warnings
            .iter()
            .map(|w| FileWarning::new(&target.source_path, w))
            .chain(
                shared_content
                    .warnings
                    .iter()
                    .map(|w| FileWarning::new(shared_path, w)),
            )
            .collect();

        let artifact = ready.then(|| {
            DeploymentArtifact::new(
                &target.name,
                &target.output_path,
                self.pipeline.assembler.assemble(&target_content, &shared_content),
            )
        });
        debug!(target = %target.name, assembled = artifact.is_some(), "preview");

        PreviewResult {
            validation,
            artifact,
            summary: Some(PreviewSummary::of(&target_content)),
            warnings,
        }
    }

    fn scan(&self, path: &Path, kind: DocumentKind) -> (FileValidation, Option<SourceDocument>) {
        let mut file = FileValidation::new(path, kind);
        let text = match self.fs.read(path) {
            Ok(text) => text,
            Err(e) => {
                file.read_error = Some(format!("cannot read source: {}", e.reason()));
                return (file, None);
            }
        };
        let document = SourceDocument::new(path, text);
        file.issues = self.pipeline.validator.validate(&document, kind).issues().to_vec();
        (file, Some(document))
    }
}
