//! Property tests over assembled artifacts.

use std::collections::BTreeSet;

use proptest::prelude::*;

use lambda_bundler::domain::entities::{ExtractedContent, SourceDocument};
use lambda_bundler::domain::ports::{ArtifactAssembler, SectionExtractor};
use lambda_bundler::domain::services::{BundlePipeline, PipelineSettings};
use lambda_bundler::domain::value_objects::SharedImportPatterns;

use crate::support::{FUNCTION_END, FUNCTION_START, IMPORT_END, IMPORT_START};

fn function_names() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    proptest::collection::btree_set("[a-z][a-z0-9_]{0,8}", 2..10).prop_flat_map(|names| {
        let names: Vec<String> = names.into_iter().collect();
        let len = names.len();
        (Just(names), 1..len).prop_map(|(names, split)| {
            (names[..split].to_vec(), names[split..].to_vec())
        })
    })
}

fn shared_import_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("from .shared_configuration import load_configuration".to_string()),
        Just("from shared_configuration import CONFIG, load_configuration".to_string()),
        Just("import shared_configuration".to_string()),
        Just("from . import shared_configuration".to_string()),
    ]
}

fn defs(names: &[String]) -> Vec<String> {
    names
        .iter()
        .flat_map(|name| [format!("def {}():", name), "    return None".to_string(), String::new()])
        .collect()
}

fn document(imports: &[String], functions: &[String]) -> SourceDocument {
    let mut lines = vec![IMPORT_START.to_string()];
    lines.extend_from_slice(imports);
    lines.push(IMPORT_END.to_string());
    lines.push(FUNCTION_START.to_string());
    lines.extend_from_slice(functions);
    lines.push(FUNCTION_END.to_string());
    SourceDocument::new("doc.py", lines.join("\n"))
}

fn pipeline() -> BundlePipeline {
    BundlePipeline::new(&PipelineSettings::default()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every function of both documents appears exactly once in the artifact.
    #[test]
    fn property_artifact_keeps_every_function_once((target_names, shared_names) in function_names()) {
        let pipeline = pipeline();
        let target = pipeline.extractor.extract(&document(&["import os".to_string()], &defs(&target_names)));
        let shared = pipeline.extractor.extract(&document(&[], &defs(&shared_names)));

        let text = pipeline.assembler.assemble(&target, &shared);
        let found = ExtractedContent { functions: text, ..Default::default() }.defined_names();

        let unique: BTreeSet<&String> = found.iter().collect();
        prop_assert_eq!(unique.len(), found.len());
        let expected: BTreeSet<&String> = target_names.iter().chain(&shared_names).collect();
        prop_assert_eq!(unique, expected);
    }

    /// PROPERTY: artifacts never contain a shared-module import line.
    #[test]
    fn property_artifact_has_no_shared_imports(
        shared_imports in proptest::collection::vec(shared_import_line(), 1..4),
        position in 0usize..3,
    ) {
        let pipeline = pipeline();
        let mut imports = vec!["import os".to_string(), "import json".to_string()];
        for line in shared_imports {
            imports.insert(position.min(imports.len()), line);
        }
        let target = pipeline.extractor.extract(&document(&imports, &defs(&["lambda_handler".to_string()])));
        let shared = pipeline.extractor.extract(&document(
            &["from shared_configuration import CONFIG".to_string()],
            &defs(&["load_configuration".to_string()]),
        ));

        let text = pipeline.assembler.assemble(&target, &shared);
        let patterns = SharedImportPatterns::new("shared_configuration").unwrap();
        for line in text.lines() {
            prop_assert!(!patterns.is_match(line), "shared import survived: {:?}", line);
        }
        prop_assert!(pipeline.self_check.check(&text).is_ok());
    }

    /// PROPERTY: assembly is deterministic.
    #[test]
    fn property_assembly_is_deterministic((target_names, shared_names) in function_names()) {
        let pipeline = pipeline();
        let target = document(&["from typing import Any".to_string()], &defs(&target_names));
        let shared = document(&["from typing import Dict".to_string()], &defs(&shared_names));

        let first = pipeline.assembler.assemble(
            &pipeline.extractor.extract(&target),
            &pipeline.extractor.extract(&shared),
        );
        let second = pipeline.assembler.assemble(
            &pipeline.extractor.extract(&target),
            &pipeline.extractor.extract(&shared),
        );
        prop_assert_eq!(first, second);
    }
}
