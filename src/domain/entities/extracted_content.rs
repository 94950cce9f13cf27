//! Extracted content entity

use super::{ImportStatement, ImportWarning};

/// A document split into its sections by the content extractor
///
/// Derived once per document and consumed by the assembler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedContent {
    /// Lines before the import block, verbatim
    pub header: String,
    /// Parsed import block, shared-module imports excluded
    pub imports: Vec<ImportStatement>,
    /// Text between the function markers
    pub functions: String,
    /// Lines of the shared-imports section, dropped from artifacts
    pub shared_import_lines: Vec<String>,
    pub warnings: Vec<ImportWarning>,
}

impl ExtractedContent {
    /// Names introduced by top-level `def`/`class` statements in the function block
    pub fn defined_names(&self) -> Vec<String> {
        self.functions
            .lines()
            .filter_map(|line| {
                let rest = line
                    .strip_prefix("async def ")
                    .or_else(|| line.strip_prefix("def "))
                    .or_else(|| line.strip_prefix("class "))?;
                let name: String = rest
                    .chars()
                    .take_while(|c| c.is_alphanumeric() || *c == '_')
                    .collect();
                (!name.is_empty()).then_some(name)
            })
            .collect()
    }
}
