//! Marker validation result entity

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::MarkerKind;

/// One structural problem in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerIssue {
    pub message: String,
    /// One-based line the issue refers to, if any
    pub line: Option<usize>,
}

impl MarkerIssue {
    pub fn new(message: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

impl fmt::Display for MarkerIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of scanning one document for markers
///
/// Valid iff no issues were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerValidationResult {
    issues: Vec<MarkerIssue>,
    /// Zero-based line index of the first occurrence of each marker found
    marker_positions: BTreeMap<MarkerKind, usize>,
}

impl MarkerValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_issue(&mut self, message: impl Into<String>, line: Option<usize>) {
        self.issues.push(MarkerIssue::new(message, line));
    }

    pub fn record_position(&mut self, kind: MarkerKind, line_index: usize) {
        self.marker_positions.entry(kind).or_insert(line_index);
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[MarkerIssue] {
        &self.issues
    }

    /// Issue messages in the order they were found
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(|i| i.message.clone()).collect()
    }

    /// One-based line for each issue, where known
    pub fn issue_lines(&self) -> Vec<Option<usize>> {
        self.issues.iter().map(|i| i.line).collect()
    }

    pub fn marker_positions(&self) -> &BTreeMap<MarkerKind, usize> {
        &self.marker_positions
    }

    pub fn position(&self, kind: MarkerKind) -> Option<usize> {
        self.marker_positions.get(&kind).copied()
    }
}
