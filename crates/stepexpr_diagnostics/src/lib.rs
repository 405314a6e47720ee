//! stepexpr_diagnostics: Error reporting for expression compilation.
//!
//! Tokenization has exactly two failure modes, both fatal: an escape
//! character in front of a codepoint that cannot be escaped, and an escape
//! character as the last codepoint of the expression. Each error carries
//! the original expression text and a codepoint offset, and renders as a
//! multi-line message that points a caret at the offending column.

use std::fmt;

use stepexpr_core::text::{codepoint_count, TextPos};
use thiserror::Error;

/// The kind of a tokenization error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An escape character precedes a codepoint that cannot be escaped.
    CannotEscape,
    /// The expression ends with an unconsumed escape character.
    EndOfLineCannotBeEscaped,
}

/// A message template: the problem statement and a suggested fix.
#[derive(Debug, Clone, Copy)]
pub struct ErrorMessage {
    pub kind: ErrorKind,
    pub problem: &'static str,
    pub solution: &'static str,
}

/// A fatal error raised while tokenizing an expression.
///
/// The rendered `Display` output is the user-facing compilation error:
///
/// ```text
/// This expression has a problem at column 5:
///
/// four \n three
///      ^
/// Only the characters '{', '}', '(', ')', '\', '/' and whitespace can be escaped.
/// If you did mean to use an '\' you can use '\\' to escape it
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ExpressionError {
    expression: String,
    offset: TextPos,
    kind: ErrorKind,
    problem: &'static str,
    solution: &'static str,
}

impl ExpressionError {
    fn new(expression: &str, offset: TextPos, message: &ErrorMessage) -> Self {
        Self {
            expression: expression.to_string(),
            offset,
            kind: message.kind,
            problem: message.problem,
            solution: message.solution,
        }
    }

    /// An escape character precedes a codepoint that is neither whitespace
    /// nor one of the reserved characters. `offset` is a codepoint offset
    /// into the original expression.
    pub fn cannot_escape(expression: &str, offset: TextPos) -> Self {
        Self::new(expression, offset, &messages::CANNOT_ESCAPE)
    }

    /// The expression ends with an unconsumed escape character.
    pub fn end_of_line_cannot_be_escaped(expression: &str) -> Self {
        let offset = codepoint_count(expression).saturating_sub(1);
        Self::new(expression, offset, &messages::END_OF_LINE_CANNOT_BE_ESCAPED)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The codepoint offset this error points at (0-based).
    pub fn offset(&self) -> TextPos {
        self.offset
    }

    /// The original expression text.
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

impl fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let column = (self.offset + 1).to_string();
        let header = format_message(messages::PROBLEM_AT_COLUMN, &[&column]);
        write!(
            f,
            "{}\n\n{}\n{}\n{}.\n{}",
            header,
            self.expression,
            point_at(self.offset),
            self.problem,
            self.solution
        )
    }
}

/// Render the caret line pointing at a codepoint offset.
pub fn point_at(offset: TextPos) -> String {
    let mut pointer = " ".repeat(offset as usize);
    pointer.push('^');
    pointer
}

/// Format a message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

pub mod messages {
    use super::{ErrorKind, ErrorMessage};

    pub const PROBLEM_AT_COLUMN: &str = "This expression has a problem at column {0}:";

    pub const CANNOT_ESCAPE: ErrorMessage = ErrorMessage {
        kind: ErrorKind::CannotEscape,
        problem: "Only the characters '{', '}', '(', ')', '\\', '/' and whitespace can be escaped",
        solution: "If you did mean to use an '\\' you can use '\\\\' to escape it",
    };

    pub const END_OF_LINE_CANNOT_BE_ESCAPED: ErrorMessage = ErrorMessage {
        kind: ErrorKind::EndOfLineCannotBeEscaped,
        problem: "The end of line can not be escaped",
        solution: "You can use '\\\\' to escape the '\\'",
    };
}
