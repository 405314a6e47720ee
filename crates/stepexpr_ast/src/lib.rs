//! stepexpr_ast: Token model shared between the scanner and the
//! expression parser.
//!
//! Defines the closed set of token types, the reserved structural
//! characters of the expression language, and the per-type metadata the
//! parser uses for its own error messages.

pub mod chars;
pub mod token_type;

// Re-export key types
pub use token_type::TokenType;
