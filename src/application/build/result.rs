//! Build result types
//!
//! Per-target failures are values, not errors: one broken target never stops
//! the batch, and the result describes every target's outcome.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::{ImportWarning, MarkerIssue};

/// Why a target could not be built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    /// Missing, duplicate, misordered or misframed markers
    #[error("{}: {} structural marker issue(s)", .file.display(), .issues.len())]
    StructuralMarker {
        file: PathBuf,
        issues: Vec<MarkerIssue>,
    },

    /// Unreadable source or unwritable artifact
    #[error("{}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    /// The written artifact failed post-write validation
    #[error("{}: self-check failed: {}", .path.display(), .reasons.join("; "))]
    SelfCheck { path: PathBuf, reasons: Vec<String> },
}

impl TargetError {
    pub fn kind(&self) -> &'static str {
        match self {
            TargetError::StructuralMarker { .. } => "structural_marker",
            TargetError::Io { .. } => "io",
            TargetError::SelfCheck { .. } => "self_check",
        }
    }

    /// One message per underlying problem, `file[:line]: message`
    pub fn messages(&self) -> Vec<String> {
        match self {
            TargetError::StructuralMarker { file, issues } => issues
                .iter()
                .map(|issue| match issue.line {
                    Some(line) => format!("{}:{}: {}", file.display(), line, issue.message),
                    None => format!("{}: {}", file.display(), issue.message),
                })
                .collect(),
            TargetError::Io { .. } => vec![self.to_string()],
            TargetError::SelfCheck { path, reasons } => reasons
                .iter()
                .map(|reason| format!("{}: self-check failed: {}", path.display(), reason))
                .collect(),
        }
    }
}

/// Non-fatal import-syntax problem, attributed to its file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileWarning {
    pub file: PathBuf,
    pub line: usize,
    pub message: String,
}

impl FileWarning {
    pub fn new(file: &Path, warning: &ImportWarning) -> Self {
        Self {
            file: file.to_path_buf(),
            line: warning.line,
            message: warning.message.clone(),
        }
    }
}

impl fmt::Display for FileWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file.display(), self.line, self.message)
    }
}

/// Outcome of one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetStatus {
    /// Artifact written and self-checked
    Built,
    /// Artifact on disk already matched; self-checked, not rewritten
    Unchanged,
    Failed(Vec<TargetError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport {
    pub name: String,
    pub output_path: PathBuf,
    pub status: TargetStatus,
}

impl TargetReport {
    pub fn is_success(&self) -> bool {
        !matches!(self.status, TargetStatus::Failed(_))
    }
}

/// Result of a build run
#[derive(Debug, Clone, Default)]
pub struct BuildResult {
    pub targets: Vec<TargetReport>,
    pub warnings: Vec<FileWarning>,
}

impl BuildResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_report(&mut self, name: &str, output_path: &Path, status: TargetStatus) {
        self.targets.push(TargetReport {
            name: name.to_string(),
            output_path: output_path.to_path_buf(),
            status,
        });
    }

    pub fn add_warnings(&mut self, file: &Path, warnings: &[ImportWarning]) {
        self.warnings
            .extend(warnings.iter().map(|w| FileWarning::new(file, w)));
    }

    /// True iff every target succeeded
    pub fn is_success(&self) -> bool {
        self.targets.iter().all(TargetReport::is_success)
    }

    /// Output paths of every successful target, unchanged ones included
    pub fn built(&self) -> Vec<&Path> {
        self.targets
            .iter()
            .filter(|t| t.is_success())
            .map(|t| t.output_path.as_path())
            .collect()
    }

    /// Output paths that were written during this run
    pub fn written(&self) -> Vec<&Path> {
        self.paths_with(|status| matches!(status, TargetStatus::Built))
    }

    pub fn unchanged(&self) -> Vec<&Path> {
        self.paths_with(|status| matches!(status, TargetStatus::Unchanged))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &[TargetError])> {
        self.targets.iter().filter_map(|t| match &t.status {
            TargetStatus::Failed(errors) => Some((t.name.as_str(), errors.as_slice())),
            _ => None,
        })
    }

    /// Every problem across all targets, `target: file[:line]: message`
    pub fn errors(&self) -> Vec<String> {
        self.failures()
            .flat_map(|(name, errors)| {
                errors
                    .iter()
                    .flat_map(TargetError::messages)
                    .map(move |message| format!("{}: {}", name, message))
            })
            .collect()
    }

    fn paths_with(&self, keep: impl Fn(&TargetStatus) -> bool) -> Vec<&Path> {
        self.targets
            .iter()
            .filter(|t| keep(&t.status))
            .map(|t| t.output_path.as_path())
            .collect()
    }
}
