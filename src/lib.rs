#![forbid(unsafe_code)]
//! Vega Programming Language Front End
//!
//! Vega is a small, statically declared language with C-like blocks. This crate wires the front end
//! (lexer, scope-checking parser, diagnostics) to a command-line driver.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a front-end bug (logic error), use
//!   `.expect("INVARIANT: reason")` with a clear explanation.

pub mod cli;
pub mod frontend;
pub mod version;

pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;
pub use frontend::symbols;
pub use frontend::token_stream;

pub use frontend::listing::{render_symbols, render_tokens};
pub use vega_syntax::check;
