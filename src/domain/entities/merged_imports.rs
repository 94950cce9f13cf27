//! Merged import set entity

use std::collections::{BTreeMap, BTreeSet};

/// Import block produced by combining a target's imports with the shared module's
///
/// Every `from`-import name appears at most once per module across the
/// rendered lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedImportSet {
    lines: Vec<String>,
    from_names: BTreeMap<String, BTreeSet<String>>,
    plain: BTreeSet<String>,
    appended: usize,
}

impl MergedImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a statement from the target, unchanged
    pub fn push_original(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// Emit a statement contributed by the shared module
    pub fn push_appended(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
        self.appended += 1;
    }

    /// Record that `name` is bound from `module`; returns false if it already was
    pub fn bind(&mut self, module: &str, name: &str) -> bool {
        self.from_names
            .entry(module.to_string())
            .or_default()
            .insert(name.to_string())
    }

    pub fn is_bound(&self, module: &str, name: &str) -> bool {
        self.from_names
            .get(module)
            .is_some_and(|names| names.contains(name))
    }

    /// True once any name has been bound from `module`
    pub fn has_module(&self, module: &str) -> bool {
        self.from_names.contains_key(module)
    }

    /// Record a plain or verbatim statement by its normalized text; returns false if seen
    pub fn record_plain(&mut self, normalized: String) -> bool {
        self.plain.insert(normalized)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of statements added from the shared module
    pub fn appended_count(&self) -> usize {
        self.appended
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Rendered import block, one statement per entry, no trailing newline
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}
