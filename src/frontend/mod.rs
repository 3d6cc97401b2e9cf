//! Vega Compiler Frontend
//!
//! This module exposes the front-end components:
//! - `lexer`: tokenization of source code
//! - `token_stream`: the line-tagged token queue between lexer and parser
//! - `parser`: grammar and scope checking
//! - `symbols`: symbol table and scope management
//! - `diagnostics`: error values and report rendering
//! - `listing`: plain-text dumps of token streams and symbol tables

// Syntax components are provided by the vega_syntax crate.
pub use vega_syntax::{diagnostics, lexer, parser, symbols, token_stream};

pub mod listing;
