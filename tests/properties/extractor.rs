//! Property tests for marker scanning and section extraction.

use proptest::prelude::*;

use lambda_bundler::domain::entities::SourceDocument;
use lambda_bundler::domain::ports::{MarkerValidator, SectionExtractor};
use lambda_bundler::domain::services::{BundlePipeline, PipelineSettings};
use lambda_bundler::domain::value_objects::DocumentKind;

use crate::support::{FUNCTION_END, FUNCTION_START, IMPORT_END, IMPORT_START};

fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[ -~]{0,40}",
        1 => Just(IMPORT_START.to_string()),
        1 => Just(IMPORT_END.to_string()),
        1 => Just(FUNCTION_START.to_string()),
        1 => Just(FUNCTION_END.to_string()),
        1 => Just("from .shared_configuration import (".to_string()),
        1 => Just("from x import (a,".to_string()),
        1 => Just("try:".to_string()),
        1 => Just("# Shared configuration imports".to_string()),
        1 => Just(")".to_string()),
    ]
}

fn pipeline() -> BundlePipeline {
    BundlePipeline::new(&PipelineSettings::default()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: scanning and extraction never panic on arbitrary documents.
    #[test]
    fn property_extract_never_panics(lines in proptest::collection::vec(line(), 0..40)) {
        let pipeline = pipeline();
        let document = SourceDocument::new("fuzz.py", lines.join("\n"));

        let _ = pipeline.validator.validate(&document, DocumentKind::Function);
        let _ = pipeline.validator.validate(&document, DocumentKind::Shared);
        let content = pipeline.extractor.extract(&document);

        for warning in &content.warnings {
            prop_assert!(warning.line >= 1 && warning.line <= lines.len().max(1));
        }
    }

    /// PROPERTY: a document missing IMPORT_START and FUNCTION_END reports both in one call.
    #[test]
    fn property_validation_reports_every_missing_marker(
        body in proptest::collection::vec("[a-z =()]{0,20}", 0..10),
    ) {
        let mut lines = vec![IMPORT_END.to_string(), FUNCTION_START.to_string()];
        lines.extend(body);
        let document = SourceDocument::new("f.py", lines.join("\n"));

        let result = pipeline().validator.validate(&document, DocumentKind::Function);
        let messages = result.messages();
        prop_assert!(messages.contains(&"Missing required marker: IMPORT_BLOCK_START".to_string()));
        prop_assert!(messages.contains(&"Missing required marker: FUNCTION_BLOCK_END".to_string()));
    }
}
