//! Structural marker value objects
//!
//! Markers are framed comment lines that delimit the import block and the
//! function block of a source file:
//!
//! ```text
//! # ╭──────────── IMPORT_BLOCK_START ────────────╮
//! import os
//! # ╰──────────── IMPORT_BLOCK_END ──────────────╯
//! ```

use std::fmt;

/// Characters stripped from a comment line before comparing it to a marker name.
const FRAME_CHARS: &[char] = &['#', '╭', '╮', '╰', '╯', '─', '│', '-', '='];

/// The four structural markers recognised in source documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MarkerKind {
    ImportStart,
    ImportEnd,
    FunctionStart,
    FunctionEnd,
}

impl MarkerKind {
    /// All markers in their required document order
    pub const ALL: [MarkerKind; 4] = [
        MarkerKind::ImportStart,
        MarkerKind::ImportEnd,
        MarkerKind::FunctionStart,
        MarkerKind::FunctionEnd,
    ];

    /// Literal marker name as it appears between the borders
    pub fn name(&self) -> &'static str {
        match self {
            MarkerKind::ImportStart => "IMPORT_BLOCK_START",
            MarkerKind::ImportEnd => "IMPORT_BLOCK_END",
            MarkerKind::FunctionStart => "FUNCTION_BLOCK_START",
            MarkerKind::FunctionEnd => "FUNCTION_BLOCK_END",
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, MarkerKind::ImportStart | MarkerKind::FunctionStart)
    }

    /// Opening and closing border a well-framed marker line must carry
    pub fn frame(&self) -> (&'static str, &'static str) {
        if self.is_start() {
            ("# ╭", "╮")
        } else {
            ("# ╰", "╯")
        }
    }

    /// Recognise a marker line, regardless of whether its frame is correct.
    ///
    /// A comment that merely mentions a marker name in prose is not a marker.
    pub fn detect(line: &str) -> Option<MarkerKind> {
        let trimmed = line.trim();
        if !trimmed.starts_with('#') {
            return None;
        }
        let name = trimmed.trim_matches(|c: char| c.is_whitespace() || FRAME_CHARS.contains(&c));
        MarkerKind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Whether `line` opens and closes with this marker's literal borders
    pub fn is_well_framed(&self, line: &str) -> bool {
        let (open, close) = self.frame();
        let trimmed = line.trim();
        trimmed.starts_with(open) && trimmed.ends_with(close)
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A marker found in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerToken {
    pub kind: MarkerKind,
    /// Zero-based line index
    pub line_index: usize,
}

impl MarkerToken {
    pub fn new(kind: MarkerKind, line_index: usize) -> Self {
        Self { kind, line_index }
    }

    /// One-based line number for user-facing messages
    pub fn line_number(&self) -> usize {
        self.line_index + 1
    }
}

/// Render a marker line with the canonical frame
pub fn framed_marker(kind: MarkerKind) -> String {
    let (open, close) = kind.frame();
    let rule = "─".repeat(12);
    format!("{open}{rule} {} {rule}{close}", kind.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_well_framed_markers() {
        for kind in MarkerKind::ALL {
            let line = framed_marker(kind);
            assert_eq!(MarkerKind::detect(&line), Some(kind));
            assert!(kind.is_well_framed(&line), "{line}");
        }
    }

    #[test]
    fn detect_misframed_marker_still_recognised() {
        let line = "# IMPORT_BLOCK_START";
        assert_eq!(MarkerKind::detect(line), Some(MarkerKind::ImportStart));
        assert!(!MarkerKind::ImportStart.is_well_framed(line));
    }

    #[test]
    fn start_marker_with_end_frame_is_misframed() {
        let line = "# ╰─── FUNCTION_BLOCK_START ───╯";
        assert_eq!(MarkerKind::detect(line), Some(MarkerKind::FunctionStart));
        assert!(!MarkerKind::FunctionStart.is_well_framed(line));
    }

    #[test]
    fn prose_comment_is_not_a_marker() {
        assert_eq!(
            MarkerKind::detect("# keep imports above IMPORT_BLOCK_END"),
            None
        );
        assert_eq!(MarkerKind::detect("IMPORT_BLOCK_START"), None);
        assert_eq!(MarkerKind::detect("x = 'IMPORT_BLOCK_START'"), None);
    }

    #[test]
    fn indented_marker_is_detected() {
        assert_eq!(
            MarkerKind::detect("    # ╭── FUNCTION_BLOCK_END ──╮"),
            Some(MarkerKind::FunctionEnd)
        );
    }

    #[test]
    fn token_line_number_is_one_based() {
        let token = MarkerToken::new(MarkerKind::ImportEnd, 4);
        assert_eq!(token.line_number(), 5);
    }
}
