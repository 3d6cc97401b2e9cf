//! Token types produced by the Vega lexer.
//!
//! Every token reports a [`Tag`] through [`Token::tag`]; the parser only ever compares tags.

use std::fmt;

use vega_core::lang::tags::Tag;

/// Keyword, identifier or combined operator together with its source spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub lexeme: String,
    pub tag: Tag,
}

impl Word {
    pub fn new(lexeme: impl Into<String>, tag: Tag) -> Self {
        Self {
            lexeme: lexeme.into(),
            tag,
        }
    }

    pub fn identifier(lexeme: impl Into<String>) -> Self {
        Self::new(lexeme, Tag::Id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// One-character punctuation or operator, tagged by itself.
    Punct(char),
    Word(Word),
    Num(i64),
    Real(f64),
    /// Text between a pair of quotes; the quotes are separate [`Token::Punct`] tokens.
    Literal(String),
}

impl Token {
    pub fn tag(&self) -> Tag {
        match self {
            Token::Punct(c) => Tag::Char(*c),
            Token::Word(word) => word.tag,
            Token::Num(_) => Tag::Num,
            Token::Real(_) => Tag::Real,
            Token::Literal(_) => Tag::Literal,
        }
    }

    /// Spelling of a [`Token::Word`], if this is one.
    pub fn lexeme(&self) -> Option<&str> {
        match self {
            Token::Word(word) => Some(&word.lexeme),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Punct(c) => write!(f, "{c}"),
            Token::Word(word) => f.write_str(&word.lexeme),
            Token::Num(n) => write!(f, "{n}"),
            Token::Real(x) => write!(f, "{x}"),
            Token::Literal(text) => f.write_str(text),
        }
    }
}
