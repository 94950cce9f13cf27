//! Clean result types

use std::fmt;
use std::path::PathBuf;

/// Why an artifact was not removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No artifact at the expected path
    Missing,
    /// Removal failed, e.g. permission denied
    Failed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Missing => write!(f, "missing"),
            SkipReason::Failed(reason) => write!(f, "{}", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

impl SkippedFile {
    pub fn new(path: PathBuf, reason: SkipReason) -> Self {
        Self { path, reason }
    }
}

/// Result of a clean operation
#[derive(Debug, Clone, Default)]
pub struct CleanResult {
    /// Artifacts removed (or that would be removed in a dry run)
    pub removed: Vec<PathBuf>,
    /// Per-target directories pruned after their artifact was removed
    pub removed_dirs: Vec<PathBuf>,
    pub skipped: Vec<SkippedFile>,
}

impl CleanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_removed(&mut self, path: PathBuf) {
        self.removed.push(path);
    }

    pub fn add_removed_dir(&mut self, path: PathBuf) {
        self.removed_dirs.push(path);
    }

    pub fn add_skipped(&mut self, path: PathBuf, reason: SkipReason) {
        self.skipped.push(SkippedFile::new(path, reason));
    }

    /// Paths with no artifact to remove
    pub fn missing(&self) -> impl Iterator<Item = &PathBuf> {
        self.skipped
            .iter()
            .filter(|s| s.reason == SkipReason::Missing)
            .map(|s| &s.path)
    }

    /// `path: reason` for every failed removal
    pub fn errors(&self) -> Vec<String> {
        self.skipped
            .iter()
            .filter_map(|s| match &s.reason {
                SkipReason::Failed(reason) => Some(format!("{}: {}", s.path.display(), reason)),
                SkipReason::Missing => None,
            })
            .collect()
    }

    /// Missing artifacts are not failures
    pub fn is_success(&self) -> bool {
        self.errors().is_empty()
    }
}
