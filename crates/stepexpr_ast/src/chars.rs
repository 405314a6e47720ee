//! Reserved characters of the expression language.
//!
//! These six codepoints are fixed, not configurable. Any of them can be
//! used literally in an expression by preceding it with the escape
//! character.

/// Forces the next codepoint to be treated as literal text.
pub const ESCAPE_CHARACTER: char = '\\';
/// Separates alternatives, as in `mouse/rat`.
pub const ALTERNATION_CHARACTER: char = '/';
/// Opens a parameter, as in `{int}`.
pub const BEGIN_PARAMETER_CHARACTER: char = '{';
/// Closes a parameter.
pub const END_PARAMETER_CHARACTER: char = '}';
/// Opens an optional group, as in `cup(s)`.
pub const BEGIN_OPTIONAL_CHARACTER: char = '(';
/// Closes an optional group.
pub const END_OPTIONAL_CHARACTER: char = ')';

/// Whether a codepoint may legally follow the escape character.
///
/// Only whitespace and the six reserved characters can be escaped; an
/// escape in front of anything else is a fatal error.
#[inline]
pub fn is_escapable(codepoint: char) -> bool {
    codepoint.is_whitespace()
        || matches!(
            codepoint,
            ESCAPE_CHARACTER
                | ALTERNATION_CHARACTER
                | BEGIN_PARAMETER_CHARACTER
                | END_PARAMETER_CHARACTER
                | BEGIN_OPTIONAL_CHARACTER
                | END_OPTIONAL_CHARACTER
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_characters_are_escapable() {
        for ch in ['\\', '/', '{', '}', '(', ')'] {
            assert!(is_escapable(ch), "{:?} should be escapable", ch);
        }
    }

    #[test]
    fn test_whitespace_is_escapable() {
        assert!(is_escapable(' '));
        assert!(is_escapable('\t'));
        assert!(is_escapable('\u{00A0}')); // no-break space
    }

    #[test]
    fn test_ordinary_codepoints_are_not_escapable() {
        assert!(!is_escapable('a'));
        assert!(!is_escapable('0'));
        assert!(!is_escapable('🥒'));
    }
}
