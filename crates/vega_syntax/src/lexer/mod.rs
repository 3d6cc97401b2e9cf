//! Lexer for the Vega programming language
//!
//! Reads a [`CharSource`] to exhaustion and produces a [`TokenStream`]. Scanning keeps exactly one
//! character of lookahead and never pushes a character back.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (Token, Word)
//! - `source` - Character sources (CharSource, ReaderSource)
//! - `numbers` - Integer and real literal scanning
//! - `literals` - Quoted literal scanning

mod literals;
mod numbers;
pub mod source;
pub mod tokens;

pub use source::{CharSource, ReaderSource};
pub use tokens::{Token, Word};

use tracing::trace;
use vega_core::collections::HashTable;
use vega_core::lang::operators::{self, CombinedOperator};
use vega_core::lang::vocabulary::Vocabulary;

use crate::diagnostics::CompileError;
use crate::token_stream::TokenStream;

/// Lexer for Vega source.
///
/// Reserved words from the [`Vocabulary`] are interned at construction; identifiers are interned as
/// they are first seen, so one table serves both keyword lookup and identifier reuse.
pub struct Lexer<S: CharSource> {
    source: S,
    /// One-character lookahead; `None` once the source is exhausted.
    peek: Option<char>,
    line: usize,
    words: HashTable<Word>,
    tokens: TokenStream,
}

impl<S: CharSource> Lexer<S> {
    pub fn new(source: S, vocabulary: &Vocabulary) -> Self {
        let mut words = HashTable::new();
        for (lexeme, tag) in vocabulary.words() {
            words.put(lexeme, Word::new(lexeme, tag));
        }
        Self {
            source,
            peek: None,
            line: 1,
            words,
            tokens: TokenStream::new(),
        }
    }

    /// Interned words: the vocabulary plus every identifier scanned so far.
    pub fn words(&self) -> &HashTable<Word> {
        &self.words
    }

    /// Scan the remaining input into a token stream.
    ///
    /// ## Errors
    /// Fails on an unterminated literal, an integer overflowing `i64`, or a read error.
    pub fn scan(&mut self) -> Result<TokenStream, CompileError> {
        self.advance()?;
        while let Some(c) = self.peek {
            match c {
                ' ' | '\t' => {
                    self.advance()?;
                }
                '\n' => {
                    self.line += 1;
                    self.advance()?;
                }
                '\r' => {
                    self.line += 1;
                    if self.advance()? == Some('\n') {
                        self.advance()?;
                    }
                }
                '\'' | '"' => self.scan_literal(c)?,
                c if c.is_ascii_digit() => self.scan_number()?,
                c if c.is_alphabetic() => self.scan_word()?,
                c => match operators::starting_with(c) {
                    Some(op) => self.scan_combined(op)?,
                    None => {
                        self.emit(Token::Punct(c));
                        self.advance()?;
                    }
                },
            }
        }
        Ok(std::mem::take(&mut self.tokens))
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    /// Read the next character into the lookahead slot and return it.
    fn advance(&mut self) -> Result<Option<char>, CompileError> {
        self.peek = self
            .source
            .next_char()
            .map_err(|err| CompileError::io(&err, self.line))?;
        Ok(self.peek)
    }

    fn emit(&mut self, token: Token) {
        trace!(line = self.line, %token, "token");
        self.tokens.add(token, self.line);
    }

    // ========================================================================
    // Words and operators
    // ========================================================================

    fn scan_word(&mut self) -> Result<(), CompileError> {
        let mut lexeme = String::new();
        while let Some(c) = self.peek.filter(|c| c.is_alphanumeric()) {
            lexeme.push(c);
            self.advance()?;
        }
        let word = match self.words.get(&lexeme) {
            Some(word) => word.clone(),
            None => {
                let word = Word::identifier(lexeme.as_str());
                self.words.put(lexeme, word.clone());
                word
            }
        };
        self.emit(Token::Word(word));
        Ok(())
    }

    /// Scan `op.first`, then either the full operator or the lone first character.
    ///
    /// On a mismatch the second character stays in the lookahead slot.
    fn scan_combined(&mut self, op: &CombinedOperator) -> Result<(), CompileError> {
        if self.advance()? == Some(op.second) {
            self.emit(Token::Word(Word::new(op.lexeme, op.tag)));
            self.advance()?;
        } else {
            self.emit(Token::Punct(op.first));
        }
        Ok(())
    }
}

/// Tokenize `source` with the default vocabulary.
#[tracing::instrument(skip_all, fields(len = source.len()))]
pub fn lex(source: &str) -> Result<TokenStream, CompileError> {
    Lexer::new(source.chars(), &Vocabulary::default()).scan()
}
