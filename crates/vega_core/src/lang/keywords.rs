//! Define the reserved-word vocabulary for the Vega language.
//!
//! This module is the single source of truth for reserved words: the canonical spelling, the
//! [`Tag`] the lexer emits for it, and a documentation category.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** (`True` is an identifier, `true` is a keyword).
//! - `and` / `or` share their tags with the combined operators `&&` / `||`.
//! - The basic type names all carry [`Tag::Basic`]; use [`crate::lang::types::BasicType::from_keyword`]
//!   to tell them apart.
//!
//! ## Examples
//! ```rust
//! use vega_core::lang::keywords;
//! use vega_core::lang::tags::Tag;
//!
//! assert_eq!(keywords::from_str("elif"), Some(Tag::Elif));
//! assert_eq!(keywords::from_str("int"), Some(Tag::Basic));
//! assert_eq!(keywords::from_str("main"), None);
//! ```

use super::tags::Tag;

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Type,
    Literal,
    Definition,
    ControlFlow,
    Operator,
}

/// Metadata for a reserved word.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub canonical: &'static str,
    pub tag: Tag,
    pub category: KeywordCategory,
}

const fn info(canonical: &'static str, tag: Tag, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        canonical,
        tag,
        category,
    }
}

/// Registry of all reserved words, in the order the lexer interns them.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Types
    info("int", Tag::Basic, KeywordCategory::Type),
    info("float", Tag::Basic, KeywordCategory::Type),
    info("char", Tag::Basic, KeywordCategory::Type),
    info("bool", Tag::Basic, KeywordCategory::Type),
    info("str", Tag::Type, KeywordCategory::Type),
    // Literals
    info("true", Tag::True, KeywordCategory::Literal),
    info("false", Tag::False, KeywordCategory::Literal),
    // Definitions
    info("func", Tag::Func, KeywordCategory::Definition),
    info("const", Tag::Const, KeywordCategory::Definition),
    // Control flow
    info("return", Tag::Return, KeywordCategory::ControlFlow),
    info("while", Tag::While, KeywordCategory::ControlFlow),
    info("break", Tag::Break, KeywordCategory::ControlFlow),
    info("continue", Tag::Continue, KeywordCategory::ControlFlow),
    info("pass", Tag::Pass, KeywordCategory::ControlFlow),
    info("if", Tag::If, KeywordCategory::ControlFlow),
    info("elif", Tag::Elif, KeywordCategory::ControlFlow),
    info("else", Tag::Else, KeywordCategory::ControlFlow),
    // Word operators
    info("and", Tag::And, KeywordCategory::Operator),
    info("or", Tag::Or, KeywordCategory::Operator),
    info("not", Tag::Not, KeywordCategory::Operator),
];

/// Resolve a spelling to its keyword tag, if reserved.
pub fn from_str(name: &str) -> Option<Tag> {
    KEYWORDS.iter().find(|k| k.canonical == name).map(|k| k.tag)
}

/// Return the canonical spelling for a keyword tag.
///
/// Returns `None` for tags without a unique spelling (e.g. [`Tag::Basic`]) and for non-keyword tags.
pub fn as_str(tag: Tag) -> Option<&'static str> {
    let mut matches = KEYWORDS.iter().filter(|k| k.tag == tag);
    let first = matches.next()?;
    match matches.next() {
        Some(_) => None,
        None => Some(first.canonical),
    }
}
