//! FIFO buffer of tokens paired with their source lines.
//!
//! The lexer fills the stream completely before the parser starts draining it, so queue order is
//! the lexical order of the source.

use vega_core::collections::{Queue, UnderflowError};

use crate::lexer::Token;

#[derive(Debug, Clone, PartialEq)]
pub struct TokenEntry {
    pub token: Token,
    /// 1-based line on which the token finished scanning.
    pub line: usize,
}

#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    queue: Queue<TokenEntry>,
    last_line: usize,
}

impl TokenStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, token: Token, line: usize) {
        self.last_line = line;
        self.queue.add(TokenEntry { token, line });
    }

    pub fn remove(&mut self) -> Result<TokenEntry, UnderflowError> {
        self.queue.remove()
    }

    /// Front entry without consuming it.
    pub fn peek(&self) -> Option<&TokenEntry> {
        self.queue.peek()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TokenEntry> {
        self.queue.iter()
    }

    /// Line of the most recently added token, `0` if nothing was ever added.
    pub fn last_line(&self) -> usize {
        self.last_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_with_lines() {
        let mut stream = TokenStream::new();
        stream.add(Token::Punct('{'), 1);
        stream.add(Token::Num(3), 2);
        assert_eq!(stream.len(), 2);
        assert_eq!(stream.last_line(), 2);
        assert_eq!(stream.peek().map(|e| e.line), Some(1));

        let first = stream.remove().unwrap();
        assert_eq!(first.token, Token::Punct('{'));
        let second = stream.remove().unwrap();
        assert_eq!(second, TokenEntry { token: Token::Num(3), line: 2 });
        assert_eq!(stream.remove(), Err(UnderflowError::Queue));
        assert_eq!(stream.last_line(), 2);
    }
}
