//! Build Use Case
//!
//! Drives scan → extract → merge → assemble → write → self-check for each
//! target. The shared document is read, validated and extracted once and
//! reused across targets.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::application::layout::BuildTarget;
use crate::domain::entities::{DeploymentArtifact, ExtractedContent, SourceDocument};
use crate::domain::ports::{ArtifactAssembler, FileSystem, MarkerValidator, SectionExtractor};
use crate::domain::services::{BundlePipeline, ContentExtractor, MarkerScanner, SectionAssembler};
use crate::domain::value_objects::{ContentHash, DocumentKind};

use super::result::{BuildResult, TargetError, TargetStatus};

/// Build use case - produces one self-contained artifact per target
pub struct BuildUseCase<FS, V = MarkerScanner, X = ContentExtractor, A = SectionAssembler>
where
    FS: FileSystem,
{
    fs: FS,
    pipeline: BundlePipeline<V, X, A>,
}

impl<FS, V, X, A> BuildUseCase<FS, V, X, A>
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

    /// Build every target. Never fails: each target's outcome is in the result.
    pub fn execute(&self, targets: &[BuildTarget], shared_path: &Path) -> BuildResult {
        let mut result = BuildResult::new();
        let shared = self.load_shared(shared_path, &mut result);

        for target in targets {
            let status = match self.build_target(target, &shared, &mut result) {
                Ok(status) => status,
                Err(errors) => {
                    for error in &errors {
                        warn!(target = %target.name, kind = error.kind(), "{}", error);
                    }
                    TargetStatus::Failed(errors)
                }
            };
            result.add_report(&target.name, &target.output_path, status);
        }

        info!(
            targets = targets.len(),
            written = result.written().len(),
            unchanged = result.unchanged().len(),
            failed = result.failures().count(),
            "build finished"
        );
        result
    }

    /// Read, validate and extract the shared document once
    fn load_shared(
        &self,
        shared_path: &Path,
        result: &mut BuildResult,
    ) -> Result<ExtractedContent, TargetError> {
        let document = self.read_document(shared_path)?;
        let validation = self.pipeline.validator.validate(&document, DocumentKind::Shared);
        if !validation.is_valid() {
            return Err(TargetError::StructuralMarker {
                file: shared_path.to_path_buf(),
                issues: validation.issues().to_vec(),
            });
        }
        let content = self.pipeline.extractor.extract(&document);
        self.record_warnings(shared_path, &content, result);
        Ok(content)
    }

    fn build_target(
        &self,
        target: &BuildTarget,
        shared: &Result<ExtractedContent, TargetError>,
        result: &mut BuildResult,
    ) -> Result<TargetStatus, Vec<TargetError>> {
        let document = self.read_document(&target.source_path).map_err(|e| vec![e])?;

        let mut errors = Vec::new();
        let validation = self.pipeline.validator.validate(&document, DocumentKind::Function);
        if !validation.is_valid() {
            errors.push(TargetError::StructuralMarker {
                file: target.source_path.clone(),
                issues: validation.issues().to_vec(),
            });
        }
        let shared = match shared {
            Ok(shared) => Some(shared),
            Err(error) => {
                errors.push(error.clone());
                None
            }
        };
        let Some(shared) = shared.filter(|_| errors.is_empty()) else {
            return Err(errors);
        };

        let content = self.pipeline.extractor.extract(&document);
        self.record_warnings(&target.source_path, &content, result);
        let artifact = DeploymentArtifact::new(
            &target.name,
            &target.output_path,
            self.pipeline.assembler.assemble(&content, shared),
        );

        let status = self.write_artifact(&artifact)?;
        self.self_check(&target.output_path)?;
        debug!(target = %target.name, status = ?status, "target done");
        Ok(status)
    }

    /// Write unless the artifact on disk already has identical content
    fn write_artifact(&self, artifact: &DeploymentArtifact) -> Result<TargetStatus, Vec<TargetError>> {
        let path = artifact.output_path();
        if self.fs.exists(path)
            && self
                .fs
                .hash(path)
                .is_ok_and(|hash| ContentHash::new(&hash) == artifact.hash())
        {
            return Ok(TargetStatus::Unchanged);
        }

        let io_error = |message: String| {
            vec![TargetError::Io {
                path: path.to_path_buf(),
                message,
            }]
        };
        if let Some(parent) = path.parent() {
            self.fs
                .create_dir_all(parent)
                .map_err(|e| {
                    io_error(format!("cannot create output directory: {}", e.reason()))
                })?;
        }
        self.fs
            .write(path, artifact.text())
            .map_err(|e| io_error(format!("cannot write artifact: {}", e.reason())))?;
        Ok(TargetStatus::Built)
    }

    /// Re-read the artifact from disk and check it
    fn self_check(&self, path: &Path) -> Result<(), Vec<TargetError>> {
        let written = self.fs.read(path).map_err(|e| {
            vec![TargetError::Io {
                path: path.to_path_buf(),
                message: format!("cannot re-read artifact: {}", e.reason()),
            }]
        })?;
        let report = self.pipeline.self_check.check(&written);
        if report.is_ok() {
            return Ok(());
        }
        Err(vec![TargetError::SelfCheck {
            path: path.to_path_buf(),
            reasons: report.into_reasons(),
        }])
    }

    fn read_document(&self, path: &Path) -> Result<SourceDocument, TargetError> {
        self.fs
            .read(path)
            .map(|text| SourceDocument::new(path, text))
            .map_err(|e| TargetError::Io {
                path: path.to_path_buf(),
                message: format!("cannot read source: {}", e.reason()),
            })
    }

    fn record_warnings(&self, path: &Path, content: &ExtractedContent, result: &mut BuildResult) {
        for warning in &content.warnings {
            warn!(file = %path.display(), line = warning.line, "{}", warning.message);
        }
        result.add_warnings(path, &content.warnings);
    }
}
