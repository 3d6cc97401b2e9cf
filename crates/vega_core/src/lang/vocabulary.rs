//! Reserved-word configuration handed to the lexer.
//!
//! Each lexer interns its own copy of the vocabulary at construction, so two lexers never share
//! keyword state. The default vocabulary is [`crate::lang::keywords::KEYWORDS`] in registry order.

use super::keywords::KEYWORDS;
use super::tags::Tag;

/// Ordered list of `(lexeme, tag)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<(String, Tag)>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            words: KEYWORDS
                .iter()
                .map(|k| (k.canonical.to_string(), k.tag))
                .collect(),
        }
    }
}

impl Vocabulary {
    /// A vocabulary with no reserved words; every alphabetic word scans as an identifier.
    pub fn empty() -> Self {
        Self { words: Vec::new() }
    }

    /// Add or retag a word. Retagging keeps the word's original position.
    pub fn with_word(mut self, lexeme: impl Into<String>, tag: Tag) -> Self {
        let lexeme = lexeme.into();
        match self.words.iter_mut().find(|(w, _)| *w == lexeme) {
            Some(entry) => entry.1 = tag,
            None => self.words.push((lexeme, tag)),
        }
        self
    }

    pub fn without_word(mut self, lexeme: &str) -> Self {
        self.words.retain(|(w, _)| w != lexeme);
        self
    }

    pub fn words(&self) -> impl Iterator<Item = (&str, Tag)> {
        self.words.iter().map(|(w, t)| (w.as_str(), *t))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contains_every_keyword() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.len(), KEYWORDS.len());
        assert!(vocab.words().any(|(w, t)| w == "pass" && t == Tag::Pass));
        assert!(vocab.words().any(|(w, t)| w == "not" && t == Tag::Not));
    }

    #[test]
    fn test_builder() {
        let vocab = Vocabulary::default()
            .without_word("pass")
            .with_word("loop", Tag::While)
            .with_word("int", Tag::Type);
        assert!(!vocab.words().any(|(w, _)| w == "pass"));
        assert_eq!(vocab.words().last(), Some(("loop", Tag::While)));
        assert_eq!(vocab.words().next(), Some(("int", Tag::Type)));
    }

    #[test]
    fn test_empty() {
        assert!(Vocabulary::empty().is_empty());
    }
}
