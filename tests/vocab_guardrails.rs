//! Guardrails tying the lexer to the `vega_core::lang` registries.
//!
//! Adding a keyword or combined operator to a registry must be enough for the lexer to recognise it;
//! these tests fail if the two drift apart.

use vega::frontend::lexer::{self, Token};
use vega_core::lang::keywords::KEYWORDS;
use vega_core::lang::operators::COMBINED_OPERATORS;
use vega_core::lang::tags::Tag;

fn single_token(source: &str) -> Token {
    let stream = lexer::lex(source).unwrap_or_else(|e| panic!("{source:?} failed to lex: {e}"));
    assert_eq!(stream.len(), 1, "{source:?} should be one token");
    stream.peek().map(|e| e.token.clone()).unwrap()
}

#[test]
fn every_keyword_lexes_to_its_tag() {
    for keyword in KEYWORDS {
        let token = single_token(keyword.canonical);
        assert_eq!(token.tag(), keyword.tag, "keyword {}", keyword.canonical);
        assert_eq!(token.lexeme(), Some(keyword.canonical));
    }
}

#[test]
fn every_combined_operator_lexes_to_one_token() {
    for op in COMBINED_OPERATORS {
        let token = single_token(op.lexeme);
        assert_eq!(token.tag(), op.tag, "operator {}", op.lexeme);
        assert!(!token.tag().is_char());
    }
}

#[test]
fn word_operators_share_tags_with_symbols() {
    assert_eq!(single_token("and").tag(), single_token("&&").tag());
    assert_eq!(single_token("or").tag(), single_token("||").tag());
    assert_eq!(single_token("&").tag(), Tag::Char('&'));
}
