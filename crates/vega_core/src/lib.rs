//! Provide the data structures and canonical language vocabulary for the Vega front end.
//!
//! This crate is intentionally small and dependency-light. It contains:
//! - `collections`: the chained [`HashTable`](collections::HashTable) used for keyword interning and
//!   symbol storage, and the deque-backed [`Stack`](collections::Stack) / [`Queue`](collections::Queue).
//! - `lang`: token tags, the reserved-word and combined-operator registries, the type model and the
//!   [`Vocabulary`](lang::vocabulary::Vocabulary) configuration handed to the lexer.
//!
//! ## Notes
//!
//! - This is a “core” crate: **no IO**, no global state, and no lexer/parser types.

pub mod collections;
pub mod lang;
