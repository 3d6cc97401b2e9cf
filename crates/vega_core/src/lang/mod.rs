//! Vega language vocabulary.
//!
//! This module is the “front door” for language-level vocabulary: token tags, reserved words,
//! combined operators and the type model.
//!
//! ## Notes
//! - Registries are **pure**: no IO, no side effects. The lexer receives its reserved words through a
//!   [`vocabulary::Vocabulary`] value rather than through shared state.
//!
//! ## Examples
//! ```rust
//! use vega_core::lang::keywords;
//! use vega_core::lang::tags::Tag;
//!
//! assert_eq!(keywords::from_str("func"), Some(Tag::Func));
//! assert_eq!(keywords::as_str(Tag::Func), Some("func"));
//! ```

pub mod keywords;
pub mod operators;
pub mod tags;
pub mod types;
pub mod vocabulary;
