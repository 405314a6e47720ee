//! stepexpr_scanner: Tokenizer for the expression pattern language.
//!
//! Converts an expression such as `I have {int} cup(s)` into an ordered
//! stream of typed tokens for the expression parser. The scanner is a
//! hand-rolled, single-pass state machine over the expression's Unicode
//! codepoints, with full support for:
//! - merging runs of text and whitespace into single tokens
//! - atomic one-codepoint delimiter tokens
//! - backslash escapes with strict validity rules
//! - exact codepoint offsets into the original input

mod scanner;
mod token;
mod tokenizer;

pub use scanner::Scanner;
pub use token::Token;
pub use tokenizer::tokenize;
