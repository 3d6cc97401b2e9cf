#![no_main]

use libfuzzer_sys::fuzz_target;
use vega::frontend::lexer::{Lexer, ReaderSource};
use vega::frontend::parser;
use vega_core::lang::vocabulary::Vocabulary;

fuzz_target!(|data: &[u8]| {
    // Raw bytes go straight through the byte-oriented source, so no input is skipped.
    let mut lexer = Lexer::new(ReaderSource::new(data), &Vocabulary::default());
    if let Ok(tokens) = lexer.scan() {
        let _ = parser::parse(tokens);
    }
});
