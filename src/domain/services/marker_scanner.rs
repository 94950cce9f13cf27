//! Marker Scanner
//!
//! Locates structural markers in a document and validates their presence,
//! uniqueness, framing and order. Validation is exhaustive: one call reports
//! every problem in the file, and a document without any markers yields a
//! full set of `missing` issues rather than an error.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::entities::{MarkerValidationResult, SourceDocument};
use crate::domain::ports::MarkerValidator;
use crate::domain::value_objects::{DocumentKind, MarkerKind, MarkerToken};

/// Stateless marker scanner
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerScanner;

impl MarkerScanner {
    pub fn new() -> Self {
        Self
    }

    /// Every marker line in document order, duplicates included
    pub fn scan(&self, document: &SourceDocument) -> Vec<MarkerToken> {
        document
            .lines()
            .iter()
            .enumerate()
            .filter_map(|(index, line)| {
                MarkerKind::detect(line).map(|kind| MarkerToken::new(kind, index))
            })
            .collect()
    }
}

impl MarkerValidator for MarkerScanner {
    fn validate(&self, document: &SourceDocument, kind: DocumentKind) -> MarkerValidationResult {
        let tokens = self.scan(document);
        let mut result = MarkerValidationResult::new();

        let mut occurrences: BTreeMap<MarkerKind, Vec<usize>> = BTreeMap::new();
        for token in &tokens {
            occurrences
                .entry(token.kind)
                .or_default()
                .push(token.line_number());
            result.record_position(token.kind, token.line_index);
        }

        let required = required_markers(kind, &occurrences);
        for marker in MarkerKind::ALL {
            let lines = occurrences.get(&marker).map(Vec::as_slice).unwrap_or(&[]);
            match lines.len() {
                0 if required.contains(&marker) => {
                    result.add_issue(format!("Missing required marker: {}", marker), None);
                }
                0 | 1 => {}
                _ => {
                    let listed = lines
                        .iter()
                        .map(|l| l.to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    result.add_issue(
                        format!("Duplicate marker: {} found on lines {}", marker, listed),
                        lines.first().copied(),
                    );
                }
            }
        }

        for token in &tokens {
            let line = &document.lines()[token.line_index];
            if !token.kind.is_well_framed(line) {
                let (open, close) = token.kind.frame();
                result.add_issue(
                    format!(
                        "Malformed marker on line {}: {} must be framed as '{} … {}'",
                        token.line_number(),
                        token.kind,
                        open,
                        close
                    ),
                    Some(token.line_number()),
                );
            }
        }

        let present: Vec<(MarkerKind, usize)> = MarkerKind::ALL
            .into_iter()
            .filter_map(|marker| result.position(marker).map(|index| (marker, index + 1)))
            .collect();
        for (i, &(earlier, earlier_line)) in present.iter().enumerate() {
            for &(later, later_line) in &present[i + 1..] {
                if earlier_line < later_line {
                    continue;
                }
                result.add_issue(
                    format!(
                        "Marker order violation: {} (line {}) must appear before {} (line {})",
                        earlier, earlier_line, later, later_line
                    ),
                    Some(later_line),
                );
            }
        }

        debug!(
            file = %document.display_name(),
            kind = %kind,
            markers = tokens.len(),
            issues = result.issues().len(),
            "validated markers"
        );
        result
    }
}

/// Required markers for a document; a shared document that carries half of
/// the import pair must carry the other half too.
fn required_markers(
    kind: DocumentKind,
    occurrences: &BTreeMap<MarkerKind, Vec<usize>>,
) -> Vec<MarkerKind> {
    let mut required = kind.required_markers().to_vec();
    if kind == DocumentKind::Shared
        && (occurrences.contains_key(&MarkerKind::ImportStart)
            || occurrences.contains_key(&MarkerKind::ImportEnd))
    {
        required.extend([MarkerKind::ImportStart, MarkerKind::ImportEnd]);
    }
    required
}
