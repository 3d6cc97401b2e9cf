//! Parser for the Vega programming language
//!
//! Recursive descent with one token of lookahead. Grammar checking and scope analysis happen in the
//! same pass: declarations go into a [`SymbolTable`] as they are parsed, and every use of a name is
//! resolved against it.
//!
//! ## Examples
//!
//! ```rust
//! use vega_syntax::{lexer, parser};
//!
//! let source = "func main() -> int { x: int = 1; x = x + 1; }";
//! let tokens = lexer::lex(source).unwrap();
//! let globals = parser::parse(tokens).unwrap();
//! assert!(globals.lookup("main"));
//! ```

use tracing::debug;
use vega_core::lang::tags::Tag;
use vega_core::lang::types::{Array, BasicType, Type};

use crate::diagnostics::CompileError;
use crate::lexer::Token;
use crate::symbols::{Symbol, SymbolTable};
use crate::token_stream::{TokenEntry, TokenStream};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
