//! Quoted literal scanning.
//!
//! A literal yields three tokens: the opening quote, the enclosed text, and the closing quote. There
//! are no escapes; the literal ends at the next occurrence of the opening quote character.

use super::{CharSource, Lexer, Token};
use crate::diagnostics::CompileError;

impl<S: CharSource> Lexer<S> {
    pub(super) fn scan_literal(&mut self, quote: char) -> Result<(), CompileError> {
        let opened_on = self.line;
        self.emit(Token::Punct(quote));

        let mut text = String::new();
        loop {
            match self.advance()? {
                None => return Err(CompileError::unterminated_literal(quote, opened_on)),
                Some(c) if c == quote => break,
                Some(c) => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    text.push(c);
                }
            }
        }

        self.emit(Token::Literal(text));
        self.emit(Token::Punct(quote));
        self.advance()?;
        Ok(())
    }
}
