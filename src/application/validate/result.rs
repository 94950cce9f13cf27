//! Validate result types

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::application::build::FileWarning;
use crate::domain::entities::{DeploymentArtifact, ExtractedContent, MarkerIssue};
use crate::domain::value_objects::DocumentKind;

/// Scan outcome for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileValidation {
    pub path: PathBuf,
    pub kind: DocumentKind,
    pub issues: Vec<MarkerIssue>,
    /// Set when the document could not be read; no scan happened
    pub read_error: Option<String>,
}

impl FileValidation {
    pub fn new(path: &Path, kind: DocumentKind) -> Self {
        Self {
            path: path.to_path_buf(),
            kind,
            issues: Vec::new(),
            read_error: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.read_error.is_none() && self.issues.is_empty()
    }

    /// `file[:line]: message` for every problem
    pub fn messages(&self) -> Vec<String> {
        let file = self.path.display();
        if let Some(error) = &self.read_error {
            return vec![format!("{}: {}", file, error)];
        }
        self.issues
            .iter()
            .map(|issue| match issue.line {
                Some(line) => format!("{}:{}: {}", file, line, issue.message),
                None => format!("{}: {}", file, issue.message),
            })
            .collect()
    }
}

/// Result of a validate run
#[derive(Debug, Clone, Default)]
pub struct ValidateResult {
    pub files: Vec<FileValidation>,
}

impl ValidateResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, file: FileValidation) {
        self.files.push(file);
    }

    /// True iff every scanned document is valid
    pub fn is_valid(&self) -> bool {
        self.files.iter().all(FileValidation::is_valid)
    }

    pub fn invalid_count(&self) -> usize {
        self.files.iter().filter(|f| !f.is_valid()).count()
    }

    pub fn errors(&self) -> Vec<String> {
        self.files.iter().flat_map(FileValidation::messages).collect()
    }
}

/// Section sizes of a previewed target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PreviewSummary {
    pub header_lines: usize,
    pub import_statements: usize,
    /// Shared-module import lines that the artifact drops
    pub shared_import_lines: usize,
    pub function_lines: usize,
}

impl PreviewSummary {
    pub fn of(content: &ExtractedContent) -> Self {
        Self {
            header_lines: count_lines(&content.header),
            import_statements: content.imports.len(),
            shared_import_lines: content.shared_import_lines.len(),
            function_lines: count_lines(&content.functions),
        }
    }
}

fn count_lines(text: &str) -> usize {
    text.lines().filter(|l| !l.trim().is_empty()).count()
}

/// In-memory build of one target
#[derive(Debug, Clone)]
pub struct PreviewResult {
    pub validation: ValidateResult,
    /// Present only when both documents are valid
    pub artifact: Option<DeploymentArtifact>,
    pub summary: Option<PreviewSummary>,
    pub warnings: Vec<FileWarning>,
}

impl PreviewResult {
    pub fn is_valid(&self) -> bool {
        self.validation.is_valid() && self.artifact.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_replaces_issue_messages() {
        let mut file = FileValidation::new(Path::new("src/functions/a.py"), DocumentKind::Function);
        file.read_error = Some("file not found".to_string());
        assert!(!file.is_valid());
        assert_eq!(file.messages(), vec!["src/functions/a.py: file not found"]);
    }

    #[test]
    fn summary_ignores_blank_lines() {
        let content = ExtractedContent {
            header: "#!/usr/bin/env python3\n\n\"\"\"Doc.\"\"\"\n".to_string(),
            functions: "def a():\n\n    pass\n".to_string(),
            shared_import_lines: vec!["from .shared_configuration import x".to_string()],
            ..Default::default()
        };
        let summary = PreviewSummary::of(&content);
        assert_eq!(summary.header_lines, 2);
        assert_eq!(summary.function_lines, 2);
        assert_eq!(summary.shared_import_lines, 1);
        assert_eq!(summary.import_statements, 0);
    }
}
