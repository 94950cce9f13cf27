//! Post-write artifact self-check
//!
//! Re-validates generated text before it counts as built. Every failing
//! check contributes a reason; an empty report means the artifact is sound.

use crate::domain::value_objects::{MarkerKind, SharedImportPatterns};

use super::assembler::{EMBEDDED_CODE_END, EMBEDDED_CODE_START};
use super::syntax_check::check_syntax;

/// Outcome of checking one artifact
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelfCheckReport {
    reasons: Vec<String>,
}

impl SelfCheckReport {
    pub fn is_ok(&self) -> bool {
        self.reasons.is_empty()
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn into_reasons(self) -> Vec<String> {
        self.reasons
    }
}

/// Checks generated artifacts against the bundling invariants
#[derive(Debug, Clone)]
pub struct ArtifactSelfCheck {
    patterns: SharedImportPatterns,
}

impl ArtifactSelfCheck {
    pub fn new(patterns: SharedImportPatterns) -> Self {
        Self { patterns }
    }

    pub fn check(&self, text: &str) -> SelfCheckReport {
        let mut reasons = Vec::new();
        let mut opening = Vec::new();
        let mut closing = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let number = index + 1;
            if self.patterns.is_match(line) {
                reasons.push(format!(
                    "shared-module import remains on line {}: {}",
                    number,
                    line.trim()
                ));
            }
            if let Some(kind) = MarkerKind::detect(line) {
                reasons.push(format!("structural marker {} left on line {}", kind, number));
            }
            match line.trim() {
                EMBEDDED_CODE_START => opening.push(number),
                EMBEDDED_CODE_END => closing.push(number),
                _ => {}
            }
        }

        match (opening.as_slice(), closing.as_slice()) {
            ([open], [close]) if open > close => reasons.push(format!(
                "embedded-code closing banner (line {}) precedes opening banner (line {})",
                close, open
            )),
            ([_], [_]) => {}
            _ => reasons.push(format!(
                "expected exactly one embedded-code banner pair, found {} opening and {} closing",
                opening.len(),
                closing.len()
            )),
        }

        if let Err(issue) = check_syntax(text) {
            reasons.push(format!("syntax check failed on {}", issue));
        }

        SelfCheckReport { reasons }
    }
}
