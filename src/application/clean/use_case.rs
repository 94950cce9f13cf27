//! Clean Use Case
//!
//! Orchestrates artifact removal.

use tracing::{debug, info};

use crate::application::layout::{BuildTarget, BundleLayout};
use crate::domain::ports::FileSystem;

use super::options::CleanOptions;
use super::result::{CleanResult, SkipReason};

/// Clean use case - removes generated artifacts for the given targets
pub struct CleanUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> CleanUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    pub fn fs(&self) -> &FS {
        &self.fs
    }

    /// Remove each target's artifact. Per-file failures are recorded, not returned.
    pub fn execute(
        &self,
        layout: &BundleLayout,
        targets: &[BuildTarget],
        options: &CleanOptions,
    ) -> CleanResult {
        let mut result = CleanResult::new();

        for target in targets {
            let path = &target.output_path;
            if !self.fs.exists(path) {
                debug!(target = %target.name, path = %path.display(), "no artifact");
                result.add_skipped(path.clone(), SkipReason::Missing);
                continue;
            }

            if options.dry_run {
                result.add_removed(path.clone());
                continue;
            }

            if let Err(e) = self.fs.remove(path) {
                result.add_skipped(path.clone(), SkipReason::Failed(e.reason()));
                continue;
            }
            result.add_removed(path.clone());

            let Some(parent) = path.parent() else {
                continue;
            };
            if !layout.is_inside_deployment(parent) {
                continue;
            }
            // A leftover non-empty directory is fine; only report real removals.
            if let Ok(true) = self.fs.remove_dir_if_empty(parent) {
                result.add_removed_dir(parent.to_path_buf());
            }
        }

        info!(
            removed = result.removed.len(),
            missing = result.missing().count(),
            dry_run = options.dry_run,
            "clean finished"
        );
        result
    }
}
