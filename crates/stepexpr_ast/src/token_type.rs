//! TokenType enum - all token kinds produced by the scanner.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chars::{
    ALTERNATION_CHARACTER, BEGIN_OPTIONAL_CHARACTER, BEGIN_PARAMETER_CHARACTER,
    END_OPTIONAL_CHARACTER, END_PARAMETER_CHARACTER,
};

/// The kind of a token in an expression.
///
/// The scanner emits a `StartOfLine` sentinel first and an `EndOfLine`
/// sentinel last; everything in between partitions the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum TokenType {
    StartOfLine = 0,
    WhiteSpace = 1,
    Text = 2,
    Alternation = 3,
    BeginParameter = 4,
    EndParameter = 5,
    BeginOptional = 6,
    EndOptional = 7,
    EndOfLine = 8,
}

impl TokenType {
    /// The token type of a reserved structural character, if it is one.
    ///
    /// The escape character is not structural; it never reaches the
    /// classifier as itself.
    pub fn from_structural(codepoint: char) -> Option<TokenType> {
        match codepoint {
            ALTERNATION_CHARACTER => Some(TokenType::Alternation),
            BEGIN_PARAMETER_CHARACTER => Some(TokenType::BeginParameter),
            END_PARAMETER_CHARACTER => Some(TokenType::EndParameter),
            BEGIN_OPTIONAL_CHARACTER => Some(TokenType::BeginOptional),
            END_OPTIONAL_CHARACTER => Some(TokenType::EndOptional),
            _ => None,
        }
    }

    /// Whether consecutive codepoints of this type coalesce into a single
    /// token. Structural delimiters never merge, even when repeated.
    #[inline]
    pub fn is_mergeable(self) -> bool {
        matches!(self, TokenType::WhiteSpace | TokenType::Text)
    }

    /// The structural character for delimiter types.
    pub fn symbol(self) -> Option<char> {
        match self {
            TokenType::Alternation => Some(ALTERNATION_CHARACTER),
            TokenType::BeginParameter => Some(BEGIN_PARAMETER_CHARACTER),
            TokenType::EndParameter => Some(END_PARAMETER_CHARACTER),
            TokenType::BeginOptional => Some(BEGIN_OPTIONAL_CHARACTER),
            TokenType::EndOptional => Some(END_OPTIONAL_CHARACTER),
            _ => None,
        }
    }

    /// The grammatical construct a delimiter belongs to, for use in parser
    /// error messages ("... is not allowed in an optional").
    pub fn purpose(self) -> Option<&'static str> {
        match self {
            TokenType::Alternation => Some("alternation"),
            TokenType::BeginParameter | TokenType::EndParameter => Some("parameter"),
            TokenType::BeginOptional | TokenType::EndOptional => Some("optional"),
            _ => None,
        }
    }

    /// The canonical name of this token type, as used in token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenType::StartOfLine => "START_OF_LINE",
            TokenType::WhiteSpace => "WHITE_SPACE",
            TokenType::Text => "TEXT",
            TokenType::Alternation => "ALTERNATION",
            TokenType::BeginParameter => "BEGIN_PARAMETER",
            TokenType::EndParameter => "END_PARAMETER",
            TokenType::BeginOptional => "BEGIN_OPTIONAL",
            TokenType::EndOptional => "END_OPTIONAL",
            TokenType::EndOfLine => "END_OF_LINE",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
