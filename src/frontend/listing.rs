//! Plain-text listings used by the `--lex` and `--symbols` debug flags.

use std::fmt::Write;

use vega_syntax::symbols::SymbolTable;
use vega_syntax::token_stream::TokenStream;

/// One line per token: source line, integer tag code, token text.
pub fn render_tokens(stream: &TokenStream) -> String {
    let mut out = String::new();
    for entry in stream.iter() {
        let _ = writeln!(
            out,
            "{:<4}{:<5}{}",
            entry.line,
            entry.token.tag().code(),
            entry.token
        );
    }
    out
}

/// One line per symbol of the innermost scope, in declaration order.
pub fn render_symbols(table: &SymbolTable) -> String {
    let mut out = String::new();
    let Some(scope) = table.current() else {
        return out;
    };
    for symbol in scope.symbols() {
        let ty = symbol
            .ty
            .as_ref()
            .map_or_else(|| "?".to_string(), ToString::to_string);
        let constant = if symbol.constant { " const" } else { "" };
        let _ = writeln!(
            out,
            "{}  {}{}  {}  ({})",
            symbol.name,
            symbol.kind,
            constant,
            ty,
            scope.name()
        );
    }
    out
}
