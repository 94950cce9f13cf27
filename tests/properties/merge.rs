//! Property tests for import merging.

use std::collections::BTreeSet;

use proptest::prelude::*;

use lambda_bundler::domain::entities::{normalize_whitespace, ImportKind};
use lambda_bundler::domain::ports::ImportMerger;
use lambda_bundler::domain::services::ModuleImportMerger;

use crate::support::{lines_of, module_name, name_set, parse_block};

fn from_line(module: &str, names: &[String]) -> String {
    format!("from {} import {}", module, names.join(", "))
}

fn assert_names_bound_once(module: &str, lines: &[String]) -> Result<(), TestCaseError> {
    let reparsed = parse_block(&lines_of(lines));
    let mut seen = BTreeSet::new();
    for statement in reparsed.iter().filter(|s| s.module == module) {
        for name in &statement.names {
            prop_assert!(seen.insert(name.clone()), "{} bound twice in {:?}", name, lines);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: merged lines for a module name-cover the union of both sides.
    #[test]
    fn property_merge_is_complete(
        module in module_name(),
        target_names in name_set(),
        shared_names in name_set(),
    ) {
        let target = parse_block(&[from_line(&module, &target_names)]);
        let shared = parse_block(&[from_line(&module, &shared_names)]);

        let merged = ModuleImportMerger::new().merge(&target, &shared);
        let reparsed = parse_block(&lines_of(merged.lines()));

        let covered: BTreeSet<&str> = reparsed
            .iter()
            .filter(|s| s.kind == ImportKind::From && s.module == module)
            .flat_map(|s| s.names.iter().map(String::as_str))
            .collect();
        for name in target_names.iter().chain(&shared_names) {
            prop_assert!(covered.contains(name.as_str()), "{} missing from {:?}", name, merged.lines());
        }
    }

    /// PROPERTY: each `from` name is bound once, and the target's line survives unchanged.
    #[test]
    fn property_merge_binds_each_name_once(
        module in module_name(),
        target_names in name_set(),
        shared_names in name_set(),
        more_shared_names in name_set(),
    ) {
        let original = from_line(&module, &target_names);
        let target = parse_block(std::slice::from_ref(&original));
        let shared = parse_block(&[
            from_line(&module, &shared_names),
            from_line(&module, &more_shared_names),
        ]);

        let merged = ModuleImportMerger::new().merge(&target, &shared);
        prop_assert_eq!(&merged.lines()[0], &original);
        assert_names_bound_once(&module, merged.lines())?;
    }

    /// PROPERTY: several shared statements for a module the target never imports
    /// still bind each name once.
    #[test]
    fn property_shared_only_module_binds_each_name_once(
        module in module_name(),
        first_names in name_set(),
        second_names in name_set(),
    ) {
        prop_assume!(module != "os");
        let target = parse_block(&["import os".to_string()]);
        let shared = parse_block(&[
            from_line(&module, &first_names),
            from_line(&module, &second_names),
        ]);

        let merged = ModuleImportMerger::new().merge(&target, &shared);
        prop_assert_eq!(&merged.lines()[1], &from_line(&module, &first_names));
        assert_names_bound_once(&module, merged.lines())?;
    }

    /// PROPERTY: no plain import appears twice in merged output.
    #[test]
    fn property_merge_is_minimal_for_plain_imports(
        target_modules in proptest::collection::vec(module_name(), 0..6),
        shared_modules in proptest::collection::vec(module_name(), 0..6),
    ) {
        // target lines use irregular spacing; dedup is by normalized text
        let to_lines = |modules: &[String], gap: &str| -> Vec<String> {
            modules.iter().map(|m| format!("import{}{}", gap, m)).collect()
        };
        let target = parse_block(&to_lines(&target_modules, "  "));
        let shared = parse_block(&to_lines(&shared_modules, " "));

        let merged = ModuleImportMerger::new().merge(&target, &shared);

        let mut seen = BTreeSet::new();
        for line in merged.lines() {
            prop_assert!(seen.insert(normalize_whitespace(line)), "duplicate {:?}", line);
        }
        let expected: BTreeSet<&String> = target_modules.iter().chain(&shared_modules).collect();
        prop_assert_eq!(merged.lines().len(), expected.len());
    }
}
