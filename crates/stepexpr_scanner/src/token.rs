//! Token values produced by the scanner.

use serde::{Deserialize, Serialize};
use stepexpr_ast::TokenType;
use stepexpr_core::text::{TextPos, TextSpan};

/// A single token of a scanned expression.
///
/// Offsets are codepoint offsets into the original expression, so `end`
/// includes any escape characters consumed while producing `text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The text this token covers, with escape characters removed.
    /// Empty for the start-of-line and end-of-line sentinels.
    pub text: String,
    /// The kind of token.
    #[serde(rename = "type")]
    pub token_type: TokenType,
    /// Start offset in the expression (inclusive).
    pub start: TextPos,
    /// End offset in the expression (exclusive).
    pub end: TextPos,
}

impl Token {
    pub fn new(text: String, token_type: TokenType, start: TextPos, end: TextPos) -> Self {
        Self { text, token_type, start, end }
    }

    /// The span this token covers in the original expression.
    #[inline]
    pub fn span(&self) -> TextSpan {
        TextSpan::from_bounds(self.start, self.end)
    }

    /// Whether this is one of the synthetic boundary tokens.
    pub fn is_sentinel(&self) -> bool {
        matches!(
            self.token_type,
            TokenType::StartOfLine | TokenType::EndOfLine
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span() {
        let token = Token::new("have".to_string(), TokenType::Text, 2, 6);
        assert_eq!(token.span(), TextSpan::from_bounds(2, 6));
        assert!(!token.is_sentinel());
    }

    #[test]
    fn test_sentinels() {
        let start = Token::new(String::new(), TokenType::StartOfLine, 0, 0);
        assert!(start.is_sentinel());
        assert!(start.span().is_empty());
    }

    #[test]
    fn test_serialize() {
        let token = Token::new("{".to_string(), TokenType::BeginParameter, 7, 8);
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(
            json,
            "{\"text\":\"{\",\"type\":\"BEGIN_PARAMETER\",\"start\":7,\"end\":8}"
        );
    }
}
