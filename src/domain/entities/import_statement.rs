//! Import statement entity

use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::ImportOrigin;

/// Statement shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportKind {
    /// `import a, b as c`
    Plain,
    /// `from m import x, y as z`
    From,
    /// Lines carried through untouched: comments, guarded imports, malformed statements
    Verbatim,
}

impl ImportKind {
    pub fn is_verbatim(&self) -> bool {
        matches!(self, ImportKind::Verbatim)
    }
}

/// One parsed import statement from an import block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportStatement {
    pub kind: ImportKind,
    /// Module being imported. For plain imports binding several modules, the first one.
    pub module: String,
    /// Bound symbols in source order, `"name as alias"` kept as one token.
    /// For plain imports these are the `module [as alias]` tokens.
    pub names: Vec<String>,
    /// Alias of the first plain-import module
    pub alias: Option<String>,
    /// Original text, including continuation lines and comments
    pub raw_text: String,
    pub origin: ImportOrigin,
    /// One-based line where the statement starts
    pub line: usize,
}

impl ImportStatement {
    pub fn verbatim(raw_text: impl Into<String>, line: usize) -> Self {
        Self {
            kind: ImportKind::Verbatim,
            module: String::new(),
            names: Vec::new(),
            alias: None,
            raw_text: raw_text.into(),
            origin: ImportOrigin::LocalImport,
            line,
        }
    }

    /// Raw text with every whitespace run collapsed to one space
    pub fn normalized(&self) -> String {
        normalize_whitespace(&self.raw_text)
    }

    pub fn is_shared(&self) -> bool {
        self.origin == ImportOrigin::SharedConfig
    }
}

/// Collapse whitespace runs to a single space and trim the ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Non-fatal problem found while parsing an import block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportWarning {
    /// One-based line number
    pub line: usize,
    pub message: String,
}

impl ImportWarning {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}
