//! Reusable source fixtures.

pub const IMPORT_START: &str = "# ╭──────────── IMPORT_BLOCK_START ────────────╮";
pub const IMPORT_END: &str = "# ╰──────────── IMPORT_BLOCK_END ──────────────╯";
pub const FUNCTION_START: &str = "# ╭──────────── FUNCTION_BLOCK_START ──────────╮";
pub const FUNCTION_END: &str = "# ╰──────────── FUNCTION_BLOCK_END ────────────╯";

/// A function document with both marker pairs
pub fn function_source(imports: &[&str], body: &[&str]) -> String {
    let mut lines = vec![IMPORT_START];
    lines.extend_from_slice(imports);
    lines.push(IMPORT_END);
    lines.push("");
    lines.push(FUNCTION_START);
    lines.extend_from_slice(body);
    lines.push(FUNCTION_END);
    lines.join("\n") + "\n"
}

/// A shared document; the import pair is emitted only when there are imports
pub fn shared_source(imports: &[&str], body: &[&str]) -> String {
    let mut lines = Vec::new();
    if !imports.is_empty() {
        lines.push(IMPORT_START);
        lines.extend_from_slice(imports);
        lines.push(IMPORT_END);
    }
    lines.push(FUNCTION_START);
    lines.extend_from_slice(body);
    lines.push(FUNCTION_END);
    lines.join("\n") + "\n"
}

pub fn valid_function() -> String {
    function_source(
        &["import os", "from .shared_configuration import load_configuration"],
        &["def lambda_handler(event, context):", "    return load_configuration()"],
    )
}

pub fn valid_shared() -> String {
    shared_source(&[], &["def load_configuration():", "    return {}"])
}

/// A document with only the function markers
pub fn missing_import_markers() -> String {
    [FUNCTION_START, "def lambda_handler(event, context):", "    pass", FUNCTION_END].join("\n") + "\n"
}
