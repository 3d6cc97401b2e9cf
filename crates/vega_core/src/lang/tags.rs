//! Token tags.
//!
//! A [`Tag`] identifies a token's grammatical category. One-character punctuation and operators use the
//! character itself (`Tag::Char('{')`); every multi-character element has its own variant. Comparing two
//! tags is the only thing the parser needs to decide which production applies.
//!
//! The integer encoding from [`Tag::code`] keeps the two families apart: characters below
//! [`NAMED_TAG_BASE`] map to their codepoint, named tags fill the range right after it, and any
//! wider character is shifted past that range.

use std::fmt;

/// First integer code used by named (multi-character) tags.
pub const NAMED_TAG_BASE: u32 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Single-character token, tagged by the character itself.
    Char(char),

    // Combined operators
    Eq,
    Le,
    Ge,
    Ne,
    ReturnType,

    // Reserved words
    Const,
    Func,
    While,
    If,
    Elif,
    Else,
    Return,
    Pass,
    Continue,
    Break,
    True,
    False,
    Not,
    /// `and` / `&&`
    And,
    /// `or` / `||`
    Or,

    // Categories
    /// Array types.
    Index,
    /// Identifier.
    Id,
    /// Basic type keyword (`int`, `float`, `char`, `bool`).
    Basic,
    /// Callable identifier.
    Function,
    /// Non-basic type keyword (`str`).
    Type,
    /// Integer literal.
    Num,
    /// Real literal.
    Real,
    /// Quoted literal content.
    Literal,
}

impl Tag {
    /// All named tags in code order.
    pub const NAMED: [Tag; 28] = [
        Tag::Eq,
        Tag::Le,
        Tag::Ge,
        Tag::Ne,
        Tag::ReturnType,
        Tag::Const,
        Tag::Func,
        Tag::While,
        Tag::If,
        Tag::Elif,
        Tag::Else,
        Tag::Return,
        Tag::Pass,
        Tag::Continue,
        Tag::Break,
        Tag::True,
        Tag::False,
        Tag::Not,
        Tag::And,
        Tag::Or,
        Tag::Index,
        Tag::Id,
        Tag::Basic,
        Tag::Function,
        Tag::Type,
        Tag::Num,
        Tag::Real,
        Tag::Literal,
    ];

    /// Integer code of the tag.
    ///
    /// Characters below U+0100 map to their codepoint and named tags map to `256 + ordinal`.
    /// Wider characters map to their codepoint plus the number of named tags, so no two tags share
    /// a code.
    pub fn code(self) -> u32 {
        match self {
            Tag::Char(c) if u32::from(c) < NAMED_TAG_BASE => u32::from(c),
            Tag::Char(c) => u32::from(c) + Self::NAMED.len() as u32,
            named => {
                let ordinal = Self::NAMED
                    .iter()
                    .position(|t| *t == named)
                    .expect("INVARIANT: every named tag is listed in Tag::NAMED");
                NAMED_TAG_BASE + ordinal as u32
            }
        }
    }

    pub fn is_char(self) -> bool {
        matches!(self, Tag::Char(_))
    }
}

impl From<char> for Tag {
    fn from(c: char) -> Self {
        Tag::Char(c)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Tag::Char(c) => return write!(f, "'{c}'"),
            Tag::Eq => "'=='",
            Tag::Le => "'<='",
            Tag::Ge => "'>='",
            Tag::Ne => "'!='",
            Tag::ReturnType => "'->'",
            Tag::Const => "'const'",
            Tag::Func => "'func'",
            Tag::While => "'while'",
            Tag::If => "'if'",
            Tag::Elif => "'elif'",
            Tag::Else => "'else'",
            Tag::Return => "'return'",
            Tag::Pass => "'pass'",
            Tag::Continue => "'continue'",
            Tag::Break => "'break'",
            Tag::True => "'true'",
            Tag::False => "'false'",
            Tag::Not => "'not'",
            Tag::And => "'and'",
            Tag::Or => "'or'",
            Tag::Index => "array type",
            Tag::Id => "identifier",
            Tag::Basic => "type",
            Tag::Function => "function",
            Tag::Type => "type",
            Tag::Num => "integer",
            Tag::Real => "real number",
            Tag::Literal => "literal",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_codes_stay_below_named_codes() {
        assert_eq!(Tag::Char('{').code(), '{' as u32);
        assert_eq!(Tag::Eq.code(), NAMED_TAG_BASE);
        assert!(Tag::Literal.code() > 255);
    }

    #[test]
    fn test_wide_chars_do_not_collide_with_named_codes() {
        let named: Vec<u32> = Tag::NAMED.iter().map(|t| t.code()).collect();
        let last_named = NAMED_TAG_BASE + Tag::NAMED.len() as u32 - 1;
        assert_eq!(named.last(), Some(&last_named));
        assert_eq!(Tag::Char('\u{ff}').code(), 0xff);
        for c in ['\u{100}', '\u{11b}', '\u{11c}', 'é', '€', '\u{10ffff}'] {
            let code = Tag::Char(c).code();
            assert!(!named.contains(&code), "{c:?} -> {code}");
        }
        assert_eq!(Tag::Char('\u{100}').code(), last_named + 1);
    }

    #[test]
    fn test_named_codes_are_distinct() {
        let mut codes: Vec<u32> = Tag::NAMED.iter().map(|t| t.code()).collect();
        let before = codes.len();
        codes.dedup();
        assert_eq!(codes.len(), before);
    }

    #[test]
    fn test_display() {
        assert_eq!(Tag::Char(';').to_string(), "';'");
        assert_eq!(Tag::Id.to_string(), "identifier");
        assert_eq!(Tag::ReturnType.to_string(), "'->'");
    }
}
