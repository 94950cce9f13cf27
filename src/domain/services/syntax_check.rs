//! Lexical syntax check for generated artifacts
//!
//! Not a parser. It tokenizes just enough to catch what a bad merge or a
//! truncated write produces: unterminated strings, unbalanced brackets and
//! block openers with no indented body.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxIssue {
    /// One-based line number
    pub line: usize,
    pub message: String,
}

impl SyntaxIssue {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for SyntaxIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Report the first lexical problem in `text`
pub fn check_syntax(text: &str) -> Result<(), SyntaxIssue> {
    let mut scanner = Scanner::default();
    for (index, line) in text.lines().enumerate() {
        scanner.line(line, index + 1)?;
    }
    scanner.finish()
}

#[derive(Debug, Clone, Copy)]
struct OpenString {
    quote: char,
    triple: bool,
    line: usize,
}

#[derive(Debug, Default)]
struct Scanner {
    string: Option<OpenString>,
    brackets: Vec<(char, usize)>,
    continued: bool,
    logical_line: usize,
    logical_indent: usize,
    /// Line and indent of a `:`-terminated statement awaiting its body
    block: Option<(usize, usize)>,
}

impl Scanner {
    fn line(&mut self, line: &str, number: usize) -> Result<(), SyntaxIssue> {
        let starts_logical = self.string.is_none() && self.brackets.is_empty() && !self.continued;
        self.continued = false;

        if starts_logical {
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return Ok(());
            }
            let indent = indent_width(line);
            if let Some((opener, opener_indent)) = self.block.take() {
                if indent <= opener_indent {
                    return Err(SyntaxIssue::new(
                        number,
                        format!("expected an indented block after line {}", opener),
                    ));
                }
            }
            self.logical_line = number;
            self.logical_indent = indent;
        }

        let chars: Vec<char> = line.chars().collect();
        let mut last_code = None;
        let mut escaped_newline = false;
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];

            if let Some(open) = self.string {
                if c == '\\' {
                    escaped_newline = i + 1 == chars.len();
                    i += 2;
                    continue;
                }
                if c == open.quote {
                    if !open.triple {
                        self.string = None;
                        last_code = Some(c);
                        i += 1;
                        continue;
                    }
                    if chars.get(i + 1) == Some(&c) && chars.get(i + 2) == Some(&c) {
                        self.string = None;
                        last_code = Some(c);
                        i += 3;
                        continue;
                    }
                }
                i += 1;
                continue;
            }

            match c {
                '#' => break,
                '"' | '\'' => {
                    let triple = chars.get(i + 1) == Some(&c) && chars.get(i + 2) == Some(&c);
                    self.string = Some(OpenString {
                        quote: c,
                        triple,
                        line: number,
                    });
                    last_code = Some(c);
                    i += if triple { 3 } else { 1 };
                    continue;
                }
                '(' | '[' | '{' => self.brackets.push((c, number)),
                ')' | ']' | '}' => match self.brackets.pop() {
                    Some((open, _)) if closing_for(open) == c => {}
                    Some((open, open_line)) => {
                        return Err(SyntaxIssue::new(
                            number,
                            format!(
                                "closing '{}' does not match opening '{}' on line {}",
                                c, open, open_line
                            ),
                        ));
                    }
                    None => return Err(SyntaxIssue::new(number, format!("unmatched '{}'", c))),
                },
                _ => {}
            }
            if !c.is_whitespace() {
                last_code = Some(c);
            }
            i += 1;
        }

        if let Some(open) = self.string {
            if !open.triple && !escaped_newline {
                return Err(SyntaxIssue::new(open.line, "unterminated string literal"));
            }
            return Ok(());
        }

        if last_code == Some('\\') {
            self.continued = true;
        } else if self.brackets.is_empty() && last_code == Some(':') {
            self.block = Some((self.logical_line, self.logical_indent));
        }
        Ok(())
    }

    fn finish(self) -> Result<(), SyntaxIssue> {
        if let Some(open) = self.string {
            return Err(SyntaxIssue::new(open.line, "unterminated string literal"));
        }
        if let Some((open, line)) = self.brackets.last() {
            return Err(SyntaxIssue::new(*line, format!("'{}' was never closed", open)));
        }
        if let Some((opener, _)) = self.block {
            return Err(SyntaxIssue::new(
                opener,
                format!("expected an indented block after line {}", opener),
            ));
        }
        if self.continued {
            return Err(SyntaxIssue::new(
                self.logical_line,
                "unexpected end of file after line continuation",
            ));
        }
        Ok(())
    }
}

fn closing_for(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

fn indent_width(line: &str) -> usize {
    let mut width = 0;
    for c in line.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width = (width / 8 + 1) * 8,
            _ => break,
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(text: &str) -> SyntaxIssue {
        check_syntax(text).expect_err("expected a syntax issue")
    }

    #[test]
    fn accepts_ordinary_module() {
        let text = r#""""Module docstring.

Spans lines: with colons:
"""
import os
from typing import (
    Any,
    Dict,
)

CONFIG = {
    "table": os.environ.get("TABLE", 'users'),
    "paths": ["a", "b"],
}


def lambda_handler(event: Dict[str, Any], context) -> dict:
    # comment with ' and ( unbalanced
    name = event.get("name", "it's")
    if name:
        return {"greeting": f"hi {name}"}
    total = 1 + \
        2
    return {}


class Handler(object):
    def run(self):
        pass
"#;
        assert_eq!(check_syntax(text), Ok(()));
    }

    #[test]
    fn unterminated_single_quoted_string() {
        assert_eq!(issue("x = 1\ny = 'abc\n"), SyntaxIssue::new(2, "unterminated string literal"));
    }

    #[test]
    fn unterminated_triple_quoted_string() {
        assert_eq!(issue("x = 1\ny = \"\"\"abc\nmore\n").line, 2);
    }

    #[test]
    fn escaped_quote_does_not_close_string() {
        assert_eq!(check_syntax("x = 'it\\'s'\n"), Ok(()));
        assert_eq!(check_syntax("x = \"a\\\\\"\n"), Ok(()));
    }

    #[test]
    fn unclosed_bracket_reports_its_line() {
        assert_eq!(
            issue("from x import (\n    a,\n\ndef f():\n    pass\n"),
            SyntaxIssue::new(1, "'(' was never closed")
        );
    }

    #[test]
    fn mismatched_bracket() {
        assert_eq!(
            issue("x = [1, 2)\n"),
            SyntaxIssue::new(1, "closing ')' does not match opening '[' on line 1")
        );
        assert_eq!(issue("x = 1)\n"), SyntaxIssue::new(1, "unmatched ')'"));
    }

    #[test]
    fn block_without_body() {
        assert_eq!(
            issue("def f():\nx = 1\n"),
            SyntaxIssue::new(2, "expected an indented block after line 1")
        );
        assert_eq!(
            issue("x = 1\nif x:\n"),
            SyntaxIssue::new(2, "expected an indented block after line 2")
        );
    }

    #[test]
    fn multi_line_signature_opens_block() {
        assert_eq!(check_syntax("def f(\n    a,\n):\n    return a\n"), Ok(()));
        assert_eq!(issue("def f(\n    a,\n):\nreturn a\n").line, 4);
    }

    #[test]
    fn comment_lines_do_not_satisfy_block() {
        assert_eq!(issue("def f():\n# nothing\nx = 1\n").line, 3);
    }

    #[test]
    fn empty_text_is_valid() {
        assert_eq!(check_syntax(""), Ok(()));
    }
}
