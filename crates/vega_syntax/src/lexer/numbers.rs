//! Numeric literal scanning.
//!
//! `digits` → [`Token::Num`], `digits '.' digits*` → [`Token::Real`]. The integer part is accumulated
//! with checked arithmetic; the fraction adds `digit / 10^n` per digit.

use super::{CharSource, Lexer, Token};
use crate::diagnostics::CompileError;

impl<S: CharSource> Lexer<S> {
    pub(super) fn scan_number(&mut self) -> Result<(), CompileError> {
        let mut digits = String::new();
        let mut value: i64 = 0;
        let mut overflowed = false;
        while let Some(c) = self.peek.filter(char::is_ascii_digit) {
            digits.push(c);
            let digit = i64::from(c as u8 - b'0');
            match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
                Some(next) => value = next,
                None => overflowed = true,
            }
            self.advance()?;
        }
        if overflowed {
            return Err(CompileError::invalid_number(&digits, self.line));
        }

        if self.peek != Some('.') {
            self.emit(Token::Num(value));
            return Ok(());
        }
        self.advance()?;

        let mut real = value as f64;
        let mut scale = 10.0;
        while let Some(c) = self.peek.filter(char::is_ascii_digit) {
            real += f64::from(c as u8 - b'0') / scale;
            scale *= 10.0;
            self.advance()?;
        }
        self.emit(Token::Real(real));
        Ok(())
    }
}
