//! The tokenizer driver.

use stepexpr_diagnostics::ExpressionError;

use crate::scanner::Scanner;
use crate::token::Token;

/// Tokenize an expression into an ordered list of tokens.
///
/// The list always begins with a `StartOfLine` token and ends with an
/// `EndOfLine` token. Tokenization is a pure function of its input, so
/// calling it twice on the same expression yields two identical lists.
/// On failure no partial list is returned; the scanner's error propagates
/// unmodified.
pub fn tokenize(expression: &str) -> Result<Vec<Token>, ExpressionError> {
    Scanner::new(expression).collect()
}
