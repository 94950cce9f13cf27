//! Source document entity

use std::path::{Path, PathBuf};

/// A source file read once for one build
///
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    path: PathBuf,
    raw_text: String,
    lines: Vec<String>,
}

impl SourceDocument {
    pub fn new(path: impl Into<PathBuf>, raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let lines = raw_text.lines().map(str::to_string).collect();
        Self {
            path: path.into(),
            raw_text,
            lines,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// File name for user-facing messages, falling back to the full path
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_lines_without_terminators() {
        let doc = SourceDocument::new("functions/user_auth.py", "import os\r\n\ndef f():\n    pass\n");
        assert_eq!(doc.lines(), &["import os", "", "def f():", "    pass"]);
        assert_eq!(doc.display_name(), "user_auth.py");
    }

    #[test]
    fn empty_document_has_no_lines() {
        let doc = SourceDocument::new("empty.py", "");
        assert!(doc.lines().is_empty());
        assert_eq!(doc.raw_text(), "");
    }
}
