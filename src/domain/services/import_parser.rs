//! Import statement parser
//!
//! Line-oriented recognition of the constrained import syntax found in
//! function import blocks. This is intentionally not a general parser:
//!
//! - `import a, b as c`
//! - `from m import x, y as z`
//! - `from m import (` ... `)` spanning several lines
//! - `from m import x, \` backslash continuations
//!
//! Anything else is carried through as a verbatim statement. Malformed
//! `import`/`from` lines are kept verbatim too, together with a warning.

use crate::domain::entities::{ImportKind, ImportStatement, ImportWarning};
use crate::domain::value_objects::ImportOrigin;

use super::import_classifier::ImportClassifier;

/// Result of feeding one line to the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// A complete statement (import, comment or other verbatim code)
    Statement(ImportStatement),
    /// The line continues a statement; feed the next line
    ContinuationNeeded,
    /// Import-like but unparseable; kept verbatim
    Malformed(ImportStatement, ImportWarning),
    /// Blank line
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContinuationStyle {
    Parenthesized,
    Backslash,
}

/// Accumulates the lines of a multi-line statement
#[derive(Debug, Clone, Default)]
pub struct ContinuationBuffer {
    style: Option<ContinuationStyle>,
    raw_lines: Vec<String>,
    code: String,
    start_line: usize,
}

impl ContinuationBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.style.is_some()
    }

    fn start(&mut self, style: ContinuationStyle, raw: &str, code: &str, line: usize) {
        self.style = Some(style);
        self.raw_lines = vec![raw.to_string()];
        self.code = code.trim_end_matches('\\').to_string();
        self.start_line = line;
    }

    fn push(&mut self, raw: &str, code: &str) {
        self.raw_lines.push(raw.to_string());
        self.code.push(' ');
        self.code.push_str(code.trim_end_matches('\\'));
    }

    fn take(&mut self) -> (String, String, usize) {
        self.style = None;
        let raw = std::mem::take(&mut self.raw_lines).join("\n");
        let code = std::mem::take(&mut self.code);
        (raw, code, self.start_line)
    }
}

/// Parses import-block lines and classifies the modules they bind
#[derive(Debug, Clone)]
pub struct ImportParser {
    classifier: ImportClassifier,
}

impl ImportParser {
    pub fn new(classifier: ImportClassifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &ImportClassifier {
        &self.classifier
    }

    /// Parse one line. `line_number` is one-based.
    pub fn parse_line(
        &self,
        line: &str,
        line_number: usize,
        buffer: &mut ContinuationBuffer,
    ) -> ParseOutcome {
        let code = strip_comment(line).trim();

        if let Some(style) = buffer.style {
            buffer.push(line, code);
            let finished = match style {
                ContinuationStyle::Parenthesized => code.ends_with(')'),
                ContinuationStyle::Backslash => !code.ends_with('\\'),
            };
            if !finished {
                return ParseOutcome::ContinuationNeeded;
            }
            let (raw, combined, start) = buffer.take();
            return self.parse_complete(&combined, raw, start);
        }

        if line.trim().is_empty() {
            return ParseOutcome::Blank;
        }
        if line.starts_with(char::is_whitespace) || code.is_empty() {
            return ParseOutcome::Statement(ImportStatement::verbatim(line, line_number));
        }

        match first_word(code) {
            "import" | "from" => {
                if first_word(code) == "from" && opens_parenthesis(code) {
                    buffer.start(ContinuationStyle::Parenthesized, line, code, line_number);
                    ParseOutcome::ContinuationNeeded
                } else if code.ends_with('\\') {
                    buffer.start(ContinuationStyle::Backslash, line, code, line_number);
                    ParseOutcome::ContinuationNeeded
                } else {
                    self.parse_complete(code, line.to_string(), line_number)
                }
            }
            _ => ParseOutcome::Statement(ImportStatement::verbatim(line, line_number)),
        }
    }

    fn parse_complete(&self, code: &str, raw: String, line: usize) -> ParseOutcome {
        if first_word(code) == "from" {
            self.parse_from(code, raw, line)
        } else {
            self.parse_plain(code, raw, line)
        }
    }

    /// Flush a statement still open at the end of an import block.
    pub fn finish(&self, buffer: &mut ContinuationBuffer) -> Option<ParseOutcome> {
        if !buffer.is_active() {
            return None;
        }
        let (raw, _, start) = buffer.take();
        Some(malformed(raw, start, "unterminated multi-line import"))
    }

    /// Split a plain import that binds the shared module alongside others.
    ///
    /// Returns the statement rebuilt from the other modules, plus an
    /// `import ...` line naming only the shared ones. `None` unless the
    /// statement is plain and mixes both.
    pub fn split_shared_plain(
        &self,
        statement: &ImportStatement,
    ) -> Option<(ImportStatement, String)> {
        if statement.kind != ImportKind::Plain {
            return None;
        }
        let (shared, kept): (Vec<&str>, Vec<&str>) = statement
            .names
            .iter()
            .map(String::as_str)
            .partition(|token| {
                self.classifier.classify(split_binding(token).0) == ImportOrigin::SharedConfig
            });
        let (first_module, first_alias) = split_binding(kept.first()?);
        if shared.is_empty() {
            return None;
        }

        let rest = ImportStatement {
            kind: ImportKind::Plain,
            module: first_module.to_string(),
            names: kept.iter().map(|token| token.to_string()).collect(),
            alias: first_alias.map(str::to_string),
            raw_text: format!("import {}", kept.join(", ")),
            origin: self
                .classifier
                .classify_all(kept.iter().map(|token| split_binding(token).0)),
            line: statement.line,
        };
        Some((rest, format!("import {}", shared.join(", "))))
    }

    fn parse_plain(&self, code: &str, raw: String, line: usize) -> ParseOutcome {
        let rest = code["import".len()..].trim();
        if rest.is_empty() {
            return malformed(raw, line, "import statement without a module");
        }

        let mut names = Vec::new();
        let mut modules = Vec::new();
        let mut first_alias = None;
        for token in rest.split(',').map(str::trim) {
            if token.is_empty() {
                return malformed(raw, line, "empty module in import statement");
            }
            let (module, alias) = match token.split_once(" as ") {
                Some((m, a)) => (m.trim(), Some(a.trim())),
                None => (token, None),
            };
            if !is_dotted_name(module) || alias.is_some_and(|a| !is_identifier(a)) {
                return malformed(raw, line, format!("cannot parse import target '{}'", token));
            }
            if modules.is_empty() {
                first_alias = alias.map(str::to_string);
            }
            modules.push(module);
            names.push(binding_token(module, alias));
        }

        ParseOutcome::Statement(ImportStatement {
            kind: ImportKind::Plain,
            module: modules[0].to_string(),
            names,
            alias: first_alias,
            raw_text: raw,
            origin: self.classifier.classify_all(modules.iter().copied()),
            line,
        })
    }

    fn parse_from(&self, code: &str, raw: String, line: usize) -> ParseOutcome {
        let rest = code["from".len()..].trim_start();
        let module_end = rest
            .find(|c: char| c.is_whitespace() || c == '(')
            .unwrap_or(rest.len());
        let module = &rest[..module_end];
        let after_module = rest[module_end..].trim_start();

        if module.is_empty() || !is_module_path(module) {
            return malformed(raw, line, "from-import without a valid module");
        }
        let Some(names_part) = after_module.strip_prefix("import") else {
            return malformed(raw, line, format!("expected 'import' after 'from {}'", module));
        };
        if !names_part.is_empty() && !names_part.starts_with([' ', '\t', '(']) {
            return malformed(raw, line, format!("expected 'import' after 'from {}'", module));
        }

        let mut names_part = names_part.trim();
        if let Some(inner) = names_part.strip_prefix('(') {
            match inner.strip_suffix(')') {
                Some(inner) => names_part = inner,
                None => return malformed(raw, line, "unbalanced parentheses in from-import"),
            }
        }

        let mut names = Vec::new();
        for token in names_part.split(',').map(str::trim) {
            if token.is_empty() {
                // trailing comma
                continue;
            }
            let (name, alias) = match token.split_once(" as ") {
                Some((n, a)) => (n.trim(), Some(a.trim())),
                None => (token, None),
            };
            let valid = (name == "*" && alias.is_none())
                || (is_identifier(name) && alias.is_none_or(is_identifier));
            if !valid {
                return malformed(raw, line, format!("cannot parse imported name '{}'", token));
            }
            names.push(binding_token(name, alias));
        }
        if names.is_empty() {
            return malformed(raw, line, format!("from-import of '{}' names nothing", module));
        }

        let origin = self.classifier.classify_from(module, &names);
        ParseOutcome::Statement(ImportStatement {
            kind: ImportKind::From,
            module: module.to_string(),
            names,
            alias: None,
            raw_text: raw,
            origin,
            line,
        })
    }
}

fn malformed(raw: String, line: usize, message: impl Into<String>) -> ParseOutcome {
    ParseOutcome::Malformed(
        ImportStatement::verbatim(raw, line),
        ImportWarning::new(line, message),
    )
}

/// Drop a trailing `#` comment. Import lines carry no string literals.
pub fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(index) => &line[..index],
        None => line,
    }
}

fn first_word(code: &str) -> &str {
    code.split(|c: char| c.is_whitespace() || c == '(')
        .next()
        .unwrap_or_default()
}

/// `from m import (a,` with no closing parenthesis on the same line
fn opens_parenthesis(code: &str) -> bool {
    let opens = code.matches('(').count();
    let closes = code.matches(')').count();
    opens > closes
}

/// `"a.b as c"` -> `("a.b", Some("c"))`
fn split_binding(token: &str) -> (&str, Option<&str>) {
    match token.split_once(" as ") {
        Some((name, alias)) => (name.trim(), Some(alias.trim())),
        None => (token, None),
    }
}

fn binding_token(name: &str, alias: Option<&str>) -> String {
    match alias {
        Some(alias) => format!("{} as {}", name, alias),
        None => name.to_string(),
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn is_dotted_name(s: &str) -> bool {
    !s.is_empty() && s.split('.').all(is_identifier)
}

/// Dotted name with optional leading dots, or only dots (`from . import x`)
fn is_module_path(s: &str) -> bool {
    let stripped = s.trim_start_matches('.');
    stripped.is_empty() || is_dotted_name(stripped)
}
