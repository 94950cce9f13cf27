//! Import Merger
//!
//! Combines a target's import block with the shared module's.
//!
//! Target statements are emitted first, unchanged and in source order.
//! Shared statements follow in declaration order:
//!
//! - plain and verbatim statements only when their normalized text is new
//! - `from` imports of a module nothing has bound yet, unchanged
//! - `from` imports of a module already bound by the target or an earlier
//!   shared statement, as a new statement naming only the missing names (sorted)
//!
//! The target's own line is never rewritten; the appended statement re-binds
//! nothing the target already bound.

use std::collections::BTreeSet;

use tracing::debug;

use crate::domain::entities::{ImportKind, ImportStatement, MergedImportSet};
use crate::domain::ports::ImportMerger;

/// Appended statements longer than this are wrapped in parentheses
pub const MAX_LINE_LENGTH: usize = 99;

/// Module-keyed import merger
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleImportMerger;

impl ModuleImportMerger {
    pub fn new() -> Self {
        Self
    }
}

impl ImportMerger for ModuleImportMerger {
    fn merge(&self, target: &[ImportStatement], shared: &[ImportStatement]) -> MergedImportSet {
        let mut merged = MergedImportSet::new();

        for statement in target.iter().filter(|s| !s.is_shared()) {
            match statement.kind {
                ImportKind::Plain | ImportKind::Verbatim => {
                    if merged.record_plain(statement.normalized()) {
                        merged.push_original(statement.raw_text.clone());
                    }
                }
                ImportKind::From => {
                    let mut added = false;
                    for name in &statement.names {
                        added |= merged.bind(&statement.module, name);
                    }
                    if added {
                        merged.push_original(statement.raw_text.clone());
                    }
                }
            }
        }

        for statement in shared.iter().filter(|s| !s.is_shared()) {
            match statement.kind {
                ImportKind::Plain | ImportKind::Verbatim => {
                    if merged.record_plain(statement.normalized()) {
                        merged.push_appended(statement.raw_text.clone());
                    }
                }
                ImportKind::From => {
                    let missing: BTreeSet<&str> = statement
                        .names
                        .iter()
                        .map(String::as_str)
                        .filter(|name| !merged.is_bound(&statement.module, name))
                        .collect();
                    if missing.is_empty() {
                        continue;
                    }
                    let rewrite = merged.has_module(&statement.module);
                    for name in &missing {
                        merged.bind(&statement.module, name);
                    }
                    if rewrite {
                        merged.push_appended(render_from(&statement.module, &missing));
                    } else {
                        merged.push_appended(statement.raw_text.clone());
                    }
                }
            }
        }

        debug!(
            target = target.len(),
            shared = shared.len(),
            appended = merged.appended_count(),
            "merged imports"
        );
        merged
    }
}

/// `from module import a, b`, wrapped one name per line when too long
pub fn render_from<I, S>(module: &str, names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names: Vec<S> = names.into_iter().collect();
    let joined = names.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ");
    let single = format!("from {} import {}", module, joined);
    if single.chars().count() <= MAX_LINE_LENGTH {
        return single;
    }
    let mut wrapped = format!("from {} import (\n", module);
    for name in names {
        wrapped.push_str("    ");
        wrapped.push_str(name.as_ref());
        wrapped.push_str(",\n");
    }
    wrapped.push(')');
    wrapped
}
