//! Document kind value object

use std::fmt;

use super::MarkerKind;

/// Which marker set a document must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Per-function source: both the import and the function marker pairs
    Function,
    /// Shared configuration module: only the function marker pair
    Shared,
}

impl DocumentKind {
    pub fn required_markers(&self) -> &'static [MarkerKind] {
        match self {
            DocumentKind::Function => &MarkerKind::ALL,
            DocumentKind::Shared => &[MarkerKind::FunctionStart, MarkerKind::FunctionEnd],
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Function => write!(f, "function"),
            DocumentKind::Shared => write!(f, "shared"),
        }
    }
}
