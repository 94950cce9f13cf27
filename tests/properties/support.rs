//! Shared generators and helpers for the property tests.

use proptest::prelude::*;

use lambda_bundler::domain::entities::ImportStatement;
use lambda_bundler::domain::services::{ContinuationBuffer, ImportClassifier, ImportParser, ParseOutcome};
use lambda_bundler::domain::value_objects::DEFAULT_SHARED_MODULE;

pub const IMPORT_START: &str = "# ╭──────────── IMPORT_BLOCK_START ────────────╮";
pub const IMPORT_END: &str = "# ╰──────────── IMPORT_BLOCK_END ──────────────╯";
pub const FUNCTION_START: &str = "# ╭──────────── FUNCTION_BLOCK_START ──────────╮";
pub const FUNCTION_END: &str = "# ╰──────────── FUNCTION_BLOCK_END ────────────╯";

pub fn module_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("os".to_string()),
        Just("typing".to_string()),
        Just("botocore.exceptions".to_string()),
        "m[a-z]{1,5}(\\.[a-z]{1,4})?",
    ]
}

pub fn imported_name() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9]{0,9}"
}

pub fn name_set() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set(imported_name(), 1..=8).prop_map(|s| s.into_iter().collect())
}

pub fn parser() -> ImportParser {
    ImportParser::new(ImportClassifier::new(DEFAULT_SHARED_MODULE))
}

/// Parse an import block line by line, the way the extractor feeds the parser
pub fn parse_block(lines: &[String]) -> Vec<ImportStatement> {
    let parser = parser();
    let mut buffer = ContinuationBuffer::new();
    let mut statements = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        match parser.parse_line(line, index + 1, &mut buffer) {
            ParseOutcome::Statement(s) | ParseOutcome::Malformed(s, _) => statements.push(s),
            ParseOutcome::ContinuationNeeded | ParseOutcome::Blank => {}
        }
    }
    if let Some(ParseOutcome::Malformed(s, _)) = parser.finish(&mut buffer) {
        statements.push(s);
    }
    statements
}

/// Split rendered statements (possibly multi-line) back into lines
pub fn lines_of(rendered: &[String]) -> Vec<String> {
    rendered
        .iter()
        .flat_map(|statement| statement.lines().map(str::to_string).collect::<Vec<_>>())
        .collect()
}
