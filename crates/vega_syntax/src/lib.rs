//! Syntax front end for the Vega language: lexer, token stream, scope-checked parser, diagnostics.
//!
//! The pipeline has two phases. [`lexer`] reads the whole character source into a
//! [`TokenStream`](token_stream::TokenStream), then [`parser`] drains that stream while driving a
//! [`SymbolTable`](symbols::SymbolTable). Parsing stops at the first violation.
//!
//! ## Notes
//! - The parser validates; it does not build a tree. On success it hands back the global scope.
//! - Reserved words come from a [`Vocabulary`](vega_core::lang::vocabulary::Vocabulary) value passed to
//!   each lexer.
//!
//! ## Examples
//! ```rust
//! use vega_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("func main() -> int { pass; }").unwrap();
//! let globals = parser::parse(tokens).unwrap();
//! assert!(globals.lookup("main"));
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod symbols;
pub mod token_stream;

use diagnostics::CompileError;
use symbols::SymbolTable;

/// Lex and parse `source` with the default vocabulary.
///
/// ## Errors
/// Returns the first lexical, syntactic or scoping error.
pub fn check(source: &str) -> Result<SymbolTable, CompileError> {
    let tokens = lexer::lex(source)?;
    parser::parse(tokens)
}
