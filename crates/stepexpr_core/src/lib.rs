//! stepexpr_core: Core utilities for the stepexpr expression compiler.
//!
//! Provides the codepoint-oriented text position and span types used
//! throughout the tokenizer and its diagnostics.

pub mod text;

// Re-export commonly used types
pub use text::{codepoint_count, TextPos, TextSpan};
