//! Artifact Assembler
//!
//! Section order is fixed:
//!
//! 1. target header
//! 2. merged import block
//! 3. embedded shared code between the two banners
//! 4. target functions
//!
//! Shared functions come first because the artifact has no module system:
//! anything the target's functions reference must already be defined.

use crate::domain::entities::ExtractedContent;
use crate::domain::ports::{ArtifactAssembler, ImportMerger};

use super::import_merger::ModuleImportMerger;

pub const EMBEDDED_CODE_START: &str = "# === EMBEDDED SHARED CODE (AUTO-GENERATED) ===";
pub const EMBEDDED_CODE_END: &str = "# === END EMBEDDED SHARED CODE ===";

/// Joins the four sections with exactly one blank line between them
#[derive(Debug, Clone, Default)]
pub struct SectionAssembler<M = ModuleImportMerger> {
    merger: M,
}

impl<M: ImportMerger> SectionAssembler<M> {
    pub fn new(merger: M) -> Self {
        Self { merger }
    }

    pub fn merger(&self) -> &M {
        &self.merger
    }
}

impl<M: ImportMerger> ArtifactAssembler for SectionAssembler<M> {
    fn assemble(&self, target: &ExtractedContent, shared: &ExtractedContent) -> String {
        let imports = self.merger.merge(&target.imports, &shared.imports).render();
        let embedded = join_sections([
            EMBEDDED_CODE_START.to_string(),
            trim_blank_lines(&shared.functions),
            EMBEDDED_CODE_END.to_string(),
        ]);

        let mut text = join_sections([
            trim_blank_lines(&target.header),
            trim_blank_lines(&imports),
            embedded,
            trim_blank_lines(&target.functions),
        ]);
        text.push('\n');
        text
    }
}

fn join_sections<const N: usize>(sections: [String; N]) -> String {
    sections
        .into_iter()
        .filter(|section| !section.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Drop leading and trailing whitespace-only lines, keep everything between
fn trim_blank_lines(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let Some(first) = lines.iter().position(|l| !l.trim().is_empty()) else {
        return String::new();
    };
    let last = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .unwrap_or(first);
    lines[first..=last]
        .iter()
        .map(|l| l.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}
