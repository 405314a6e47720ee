//! The expression scanner.
//!
//! A single-pass state machine over the expression's codepoints. Each call
//! to `next` emits exactly one token: runs of text and whitespace merge
//! into single tokens, structural delimiters stay atomic, and escape
//! characters are absorbed into the offset bookkeeping without ever
//! appearing in token text.

use std::mem;
use std::str::Chars;

use stepexpr_ast::chars::{is_escapable, ESCAPE_CHARACTER};
use stepexpr_ast::TokenType;
use stepexpr_core::text::{codepoint_count, TextPos};
use stepexpr_diagnostics::ExpressionError;

use crate::token::Token;

/// The scanner converts an expression into a token stream.
///
/// The stream always begins with a `StartOfLine` sentinel and, on success,
/// ends with an `EndOfLine` sentinel. It is single-pass and not
/// restartable; construct a new scanner to scan the same expression again.
pub struct Scanner<'a> {
    /// The expression being scanned.
    expression: &'a str,
    /// Forward cursor over the expression's codepoints.
    codepoints: Chars<'a>,
    /// Codepoints of the token currently being built.
    buffer: String,
    /// Type of the last emitted token; None before the first step.
    previous_type: Option<TokenType>,
    /// Type of the codepoint currently being classified.
    current_type: Option<TokenType>,
    /// Set while processing the codepoint right after an escape character.
    treat_as_text: bool,
    /// Codepoint offset of the start of the buffer, escape characters
    /// included.
    index: TextPos,
    /// Escape characters absorbed into the token currently being built.
    escaped: u32,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner over an expression.
    pub fn new(expression: &'a str) -> Self {
        Self {
            expression,
            codepoints: expression.chars(),
            buffer: String::new(),
            previous_type: None,
            current_type: Some(TokenType::StartOfLine),
            treat_as_text: false,
            index: 0,
            escaped: 0,
        }
    }

    /// Scan the next token.
    fn next_token(&mut self) -> Result<Token, ExpressionError> {
        if self.current_type == Some(TokenType::StartOfLine) {
            let token = self.flush_buffer(TokenType::StartOfLine);
            self.advance_token_types();
            return Ok(token);
        }

        while let Some(codepoint) = self.codepoints.next() {
            if !self.treat_as_text && codepoint == ESCAPE_CHARACTER {
                self.escaped += 1;
                self.treat_as_text = true;
                continue;
            }
            let current = self.token_type_of(codepoint, self.treat_as_text)?;
            self.treat_as_text = false;
            self.current_type = Some(current);

            match self.previous_type {
                Some(previous) if should_flush(previous, current) => {
                    let token = self.flush_buffer(previous);
                    self.advance_token_types();
                    self.buffer.push(codepoint);
                    return Ok(token);
                }
                _ => {
                    self.advance_token_types();
                    self.buffer.push(codepoint);
                }
            }
        }

        if !self.buffer.is_empty() {
            // previous_type is always set once the buffer is non-empty
            if let Some(previous) = self.previous_type {
                let token = self.flush_buffer(previous);
                self.advance_token_types();
                return Ok(token);
            }
        }

        self.current_type = Some(TokenType::EndOfLine);
        if self.treat_as_text {
            return Err(ExpressionError::end_of_line_cannot_be_escaped(
                self.expression,
            ));
        }
        let token = self.flush_buffer(TokenType::EndOfLine);
        self.advance_token_types();
        Ok(token)
    }

    fn advance_token_types(&mut self) {
        self.previous_type = self.current_type.take();
    }

    /// Convert the buffer into a token ending at the current offset, then
    /// reset the buffer. Escape characters absorbed while building the
    /// buffer count toward the end offset only for text tokens; for any
    /// other type the count carries over to the next text flush.
    fn flush_buffer(&mut self, token_type: TokenType) -> Token {
        let mut escape_tokens = 0;
        if token_type == TokenType::Text {
            escape_tokens = mem::take(&mut self.escaped);
        }
        let end = self.index + codepoint_count(&self.buffer) + escape_tokens;
        let token = Token::new(mem::take(&mut self.buffer), token_type, self.index, end);
        self.index = end;
        token
    }

    /// Classify a single codepoint.
    ///
    /// Under `treat_as_text` only whitespace and the reserved characters
    /// are legal, and they classify as text; anything else is a fatal
    /// error at the offset of the escape character.
    fn token_type_of(
        &self,
        codepoint: char,
        treat_as_text: bool,
    ) -> Result<TokenType, ExpressionError> {
        if !treat_as_text {
            if codepoint.is_whitespace() {
                return Ok(TokenType::WhiteSpace);
            }
            return Ok(TokenType::from_structural(codepoint).unwrap_or(TokenType::Text));
        }
        if is_escapable(codepoint) {
            return Ok(TokenType::Text);
        }
        Err(ExpressionError::cannot_escape(
            self.expression,
            self.index + self.escaped,
        ))
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, ExpressionError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.previous_type == Some(TokenType::EndOfLine) {
            return None;
        }
        match self.next_token() {
            Ok(token) => Some(Ok(token)),
            Err(error) => {
                // a failed scan terminates the stream; the error is yielded once
                self.previous_type = Some(TokenType::EndOfLine);
                Some(Err(error))
            }
        }
    }
}

/// The merge rule: whether the buffered token must be flushed before a
/// codepoint of type `current` can be accepted.
///
/// Only whitespace-with-whitespace and text-with-text runs merge; a type
/// change always flushes, and non-mergeable types flush even when the same
/// type repeats. Nothing flushes while the buffer still belongs to the
/// start-of-line sentinel.
#[inline]
fn should_flush(previous: TokenType, current: TokenType) -> bool {
    previous != TokenType::StartOfLine && (current != previous || !current.is_mergeable())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepexpr_diagnostics::ErrorKind;

    fn token_types(expression: &str) -> Vec<TokenType> {
        Scanner::new(expression)
            .map(|token| token.unwrap().token_type)
            .collect()
    }

    #[test]
    fn test_should_flush_merge_rule() {
        // nothing flushes off the start-of-line sentinel
        assert!(!should_flush(TokenType::StartOfLine, TokenType::Text));
        assert!(!should_flush(TokenType::StartOfLine, TokenType::Alternation));

        // only text/text and whitespace/whitespace runs merge
        assert!(!should_flush(TokenType::Text, TokenType::Text));
        assert!(!should_flush(TokenType::WhiteSpace, TokenType::WhiteSpace));

        // a type change always flushes
        assert!(should_flush(TokenType::Text, TokenType::WhiteSpace));
        assert!(should_flush(TokenType::WhiteSpace, TokenType::Text));
        assert!(should_flush(TokenType::Text, TokenType::BeginParameter));
        assert!(should_flush(TokenType::Alternation, TokenType::Text));

        // repeated delimiters flush too
        assert!(should_flush(TokenType::BeginOptional, TokenType::BeginOptional));
        assert!(should_flush(TokenType::Alternation, TokenType::Alternation));
    }

    #[test]
    fn test_sentinels_bound_the_stream() {
        assert_eq!(
            token_types("mice"),
            vec![TokenType::StartOfLine, TokenType::Text, TokenType::EndOfLine]
        );
        assert_eq!(
            token_types(""),
            vec![TokenType::StartOfLine, TokenType::EndOfLine]
        );
    }

    #[test]
    fn test_classification() {
        assert_eq!(
            token_types("a b/{}()"),
            vec![
                TokenType::StartOfLine,
                TokenType::Text,
                TokenType::WhiteSpace,
                TokenType::Text,
                TokenType::Alternation,
                TokenType::BeginParameter,
                TokenType::EndParameter,
                TokenType::BeginOptional,
                TokenType::EndOptional,
                TokenType::EndOfLine,
            ]
        );
    }

    #[test]
    fn test_error_terminates_the_stream() {
        let mut scanner = Scanner::new("\\x");
        let first = scanner.next().unwrap();
        assert_eq!(first.unwrap().token_type, TokenType::StartOfLine);
        let second = scanner.next().unwrap();
        assert_eq!(second.unwrap_err().kind(), ErrorKind::CannotEscape);
        assert!(scanner.next().is_none());
    }
}
