//! Hand-built collections backing the Vega front end.
//!
//! - [`HashTable`]: fixed 256-bucket table with chained collisions and a per-instance diffusion table.
//! - [`Deque`]: arena-backed doubly linked list; [`Stack`] and [`Queue`] are thin views over it.
//!
//! Both structures store their nodes in a `Vec` and link them by index, so there is no shared
//! ownership or pointer aliasing to manage.

pub mod hash_table;
pub mod lists;

pub use hash_table::{BUCKET_COUNT, DiffusionTableError, HashTable};
pub use lists::{Deque, Queue, Stack, UnderflowError};
