//! Content Extractor
//!
//! Splits a document into header, import block, shared-import lines and
//! function block with a line-driven state machine:
//!
//! ```text
//! Header --IMPORT_START--> Import --banner/shared import--> SharedImport
//!   Import/SharedImport --IMPORT_END--> Between (dropped)
//!   (any) --FUNCTION_START--> Function --FUNCTION_END--> Trailer (dropped)
//! ```
//!
//! Extraction never fails. Structurally broken input yields best-effort,
//! possibly empty sections; refusing such input is the caller's job.

use tracing::debug;

use crate::domain::entities::{ExtractedContent, ImportStatement, SourceDocument};
use crate::domain::ports::SectionExtractor;
use crate::domain::value_objects::{MarkerKind, SharedImportPatterns};

use super::import_parser::{strip_comment, ContinuationBuffer, ImportParser, ParseOutcome};

/// Comment line that opens the shared-imports section of an import block
pub const SHARED_IMPORTS_BANNER: &str = "# Shared configuration imports";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Header,
    Import,
    SharedImport,
    Between,
    Function,
    Trailer,
}

/// Marker-driven section extractor
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    parser: ImportParser,
    patterns: SharedImportPatterns,
}

impl ContentExtractor {
    pub fn new(parser: ImportParser, patterns: SharedImportPatterns) -> Self {
        Self { parser, patterns }
    }

    pub fn parser(&self) -> &ImportParser {
        &self.parser
    }
}

impl SectionExtractor for ContentExtractor {
    fn extract(&self, document: &SourceDocument) -> ExtractedContent {
        let mut run = Extraction::new(self);
        for (index, line) in document.lines().iter().enumerate() {
            run.feed(line, index + 1);
        }
        let content = run.finish();

        debug!(
            file = %document.display_name(),
            imports = content.imports.len(),
            shared_lines = content.shared_import_lines.len(),
            warnings = content.warnings.len(),
            "extracted sections"
        );
        content
    }
}

/// Consecutive verbatim lines waiting to become one statement
#[derive(Debug, Default)]
struct VerbatimBlock {
    lines: Vec<String>,
    start: usize,
}

impl VerbatimBlock {
    fn push(&mut self, text: &str, line: usize) {
        if self.lines.is_empty() {
            self.start = line;
        }
        self.lines.push(text.to_string());
    }

    /// Detach a trailing block opener such as `try:`
    fn take_trailing_guard(&mut self) -> Option<String> {
        let last = self.lines.last()?;
        if strip_comment(last).trim_end().ends_with(':') {
            self.lines.pop()
        } else {
            None
        }
    }

    fn take(&mut self) -> Option<ImportStatement> {
        if self.lines.is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.lines).join("\n");
        Some(ImportStatement::verbatim(text, self.start))
    }
}

struct Extraction<'a> {
    extractor: &'a ContentExtractor,
    state: State,
    header: Vec<String>,
    functions: Vec<String>,
    content: ExtractedContent,
    buffer: ContinuationBuffer,
    verbatim: VerbatimBlock,
    shared_depth: usize,
}

impl<'a> Extraction<'a> {
    fn new(extractor: &'a ContentExtractor) -> Self {
        Self {
            extractor,
            state: State::Header,
            header: Vec::new(),
            functions: Vec::new(),
            content: ExtractedContent::default(),
            buffer: ContinuationBuffer::new(),
            verbatim: VerbatimBlock::default(),
            shared_depth: 0,
        }
    }

    fn feed(&mut self, line: &str, line_number: usize) {
        let marker = MarkerKind::detect(line);

        if marker == Some(MarkerKind::FunctionStart) && self.state != State::Function {
            self.close_imports();
            self.state = State::Function;
            return;
        }

        match self.state {
            State::Header => match marker {
                Some(MarkerKind::ImportStart) => self.state = State::Import,
                Some(_) => {}
                None => self.header.push(line.to_string()),
            },
            State::Import | State::SharedImport if marker == Some(MarkerKind::ImportEnd) => {
                self.close_imports();
                self.state = State::Between;
            }
            State::Import | State::SharedImport if marker.is_some() => {}
            State::Import => self.import_line(line, line_number),
            State::SharedImport => self.shared_line(line, line_number),
            State::Function => match marker {
                Some(MarkerKind::FunctionEnd) => self.state = State::Trailer,
                Some(_) => {}
                None => self.functions.push(line.to_string()),
            },
            State::Between | State::Trailer => {}
        }
    }

    fn import_line(&mut self, line: &str, line_number: usize) {
        let extractor = self.extractor;

        if !self.buffer.is_active() {
            if line.trim().starts_with(SHARED_IMPORTS_BANNER) {
                self.flush_verbatim();
                self.enter_shared();
                return;
            }
            if extractor.patterns.is_match(line) {
                if let Some(guard) = self.verbatim.take_trailing_guard() {
                    self.content.shared_import_lines.push(guard);
                }
                self.flush_verbatim();
                self.enter_shared();
                self.shared_line(line, line_number);
                return;
            }
        }

        match extractor.parser.parse_line(line, line_number, &mut self.buffer) {
            ParseOutcome::Blank => self.flush_verbatim(),
            ParseOutcome::ContinuationNeeded => self.flush_verbatim(),
            ParseOutcome::Statement(statement) if statement.kind.is_verbatim() => {
                self.verbatim.push(&statement.raw_text, line_number);
            }
            ParseOutcome::Statement(statement) => {
                self.flush_verbatim();
                self.push_statement(statement);
            }
            ParseOutcome::Malformed(statement, warning) => {
                self.flush_verbatim();
                self.content.imports.push(statement);
                self.content.warnings.push(warning);
            }
        }
    }

    fn shared_line(&mut self, line: &str, line_number: usize) {
        let code = strip_comment(line);
        if self.shared_depth == 0
            && returns_to_imports(line, code)
            && !self.extractor.patterns.is_match(line)
        {
            self.state = State::Import;
            self.import_line(line, line_number);
            return;
        }

        let opens = code.matches('(').count();
        let closes = code.matches(')').count();
        self.shared_depth = (self.shared_depth + opens).saturating_sub(closes);
        if !line.trim().is_empty() {
            self.content.shared_import_lines.push(line.to_string());
        }
    }

    fn enter_shared(&mut self) {
        self.state = State::SharedImport;
        self.shared_depth = 0;
    }

    /// Statements the classifier attributes to the shared module are
    /// stripped even when no literal pattern matched them. A plain import
    /// mixing the shared module with others loses only the shared part.
    fn push_statement(&mut self, statement: ImportStatement) {
        if let Some((rest, shared)) = self.extractor.parser.split_shared_plain(&statement) {
            self.content.shared_import_lines.push(shared);
            self.content.imports.push(rest);
        } else if statement.is_shared() {
            self.content
                .shared_import_lines
                .extend(statement.raw_text.lines().map(str::to_string));
        } else {
            self.content.imports.push(statement);
        }
    }

    fn flush_verbatim(&mut self) {
        if let Some(statement) = self.verbatim.take() {
            self.content.imports.push(statement);
        }
    }

    fn close_imports(&mut self) {
        if let Some(ParseOutcome::Malformed(statement, warning)) =
            self.extractor.parser.finish(&mut self.buffer)
        {
            self.flush_verbatim();
            self.content.imports.push(statement);
            self.content.warnings.push(warning);
        }
        self.flush_verbatim();
    }

    fn finish(mut self) -> ExtractedContent {
        self.close_imports();
        self.content.header = self.header.join("\n");
        self.content.functions = self.functions.join("\n");
        self.content
    }
}

/// A top-level `import`/`from` statement
fn returns_to_imports(line: &str, code: &str) -> bool {
    if line.starts_with(char::is_whitespace) {
        return false;
    }
    let code = code.trim_start();
    code.starts_with("import ") || code.starts_with("from ")
}
