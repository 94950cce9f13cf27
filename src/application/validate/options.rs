//! Validate scope

use std::path::PathBuf;

use crate::application::layout::{BuildTarget, BundleLayout};
use crate::domain::ports::FileSystem;
use crate::error::BundlerResult;

/// Which documents a validate run covers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidateScope {
    /// One target, by name
    File(String),
    /// Every resolved target
    All,
    /// Only the shared module
    SharedConfig,
    /// Every target plus the shared module
    #[default]
    Complete,
}

impl ValidateScope {
    /// Resolve to the target documents and, if covered, the shared document
    pub fn resolve<FS: FileSystem>(
        &self,
        layout: &BundleLayout,
        fs: &FS,
    ) -> BundlerResult<(Vec<BuildTarget>, Option<PathBuf>)> {
        Ok(match self {
            ValidateScope::File(name) => (vec![layout.find_target(fs, name)?], None),
            ValidateScope::All => (layout.resolve_targets(fs)?, None),
            ValidateScope::SharedConfig => (Vec::new(), Some(layout.shared_path())),
            ValidateScope::Complete => (layout.resolve_targets(fs)?, Some(layout.shared_path())),
        })
    }
}
