//! Combined (two-character) operators.
//!
//! Each entry describes a character pair the lexer recognises with one character of lookahead. No two
//! entries share a first character, so the first character alone selects the candidate.

use super::tags::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinedOperator {
    pub first: char,
    pub second: char,
    pub lexeme: &'static str,
    pub tag: Tag,
}

const fn op(first: char, second: char, lexeme: &'static str, tag: Tag) -> CombinedOperator {
    CombinedOperator {
        first,
        second,
        lexeme,
        tag,
    }
}

pub const COMBINED_OPERATORS: &[CombinedOperator] = &[
    op('&', '&', "&&", Tag::And),
    op('|', '|', "||", Tag::Or),
    op('=', '=', "==", Tag::Eq),
    op('!', '=', "!=", Tag::Ne),
    op('<', '=', "<=", Tag::Le),
    op('>', '=', ">=", Tag::Ge),
    op('-', '>', "->", Tag::ReturnType),
];

/// Return the combined operator starting with `first`, if any.
pub fn starting_with(first: char) -> Option<&'static CombinedOperator> {
    COMBINED_OPERATORS.iter().find(|op| op.first == first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_characters_are_unique() {
        for (i, a) in COMBINED_OPERATORS.iter().enumerate() {
            for b in &COMBINED_OPERATORS[i + 1..] {
                assert_ne!(a.first, b.first);
            }
        }
    }

    #[test]
    fn test_lexeme_matches_characters() {
        for op in COMBINED_OPERATORS {
            assert_eq!(op.lexeme, format!("{}{}", op.first, op.second));
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(starting_with('-').map(|op| op.tag), Some(Tag::ReturnType));
        assert!(starting_with('+').is_none());
    }
}
