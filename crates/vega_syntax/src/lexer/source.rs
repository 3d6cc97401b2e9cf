//! Character sources consumed by the lexer.
//!
//! A source yields one character at a time and signals end of input with `Ok(None)`. Reading is
//! strictly sequential; the lexer keeps its own one-character lookahead.

use std::io::{self, BufReader, Bytes, Read};
use std::str::Chars;

pub trait CharSource {
    /// Read the next character, or `None` once the source is exhausted.
    fn next_char(&mut self) -> io::Result<Option<char>>;
}

impl CharSource for Chars<'_> {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        Ok(self.next())
    }
}

/// Byte-oriented source over any [`Read`]; each byte is one character.
///
/// Multi-byte encodings are not decoded.
pub struct ReaderSource<R: Read> {
    bytes: Bytes<BufReader<R>>,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes(),
        }
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        self.bytes.next().transpose().map(|byte| byte.map(char::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_source_yields_bytes_then_end() {
        let mut source = ReaderSource::new("a\n".as_bytes());
        assert_eq!(source.next_char().unwrap(), Some('a'));
        assert_eq!(source.next_char().unwrap(), Some('\n'));
        assert_eq!(source.next_char().unwrap(), None);
        assert_eq!(source.next_char().unwrap(), None);
    }

    #[test]
    fn test_reader_source_does_not_decode_utf8() {
        let mut source = ReaderSource::new("é".as_bytes());
        assert_eq!(source.next_char().unwrap(), Some('\u{c3}'));
        assert_eq!(source.next_char().unwrap(), Some('\u{a9}'));
    }
}
