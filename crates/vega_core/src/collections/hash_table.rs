//! Fixed-size hash table with chained collisions.
//!
//! The table has exactly [`BUCKET_COUNT`] buckets and never resizes. Keys are folded into a bucket
//! index with a per-instance *diffusion table* (a permutation of `0..=255`):
//!
//! ```text
//! h = 0
//! for c in key: h = diffusion[h ^ c]
//! ```
//!
//! Collisions are normal and resolved by chaining. Entries live in an arena (`Vec`) and each bucket
//! stores the index of the head of its chain.
//!
//! ## Notes
//! - The diffusion table is drawn at random for every instance, so bucket positions are neither stable
//!   across tables nor across process restarts. Do not persist them.
//! - Only the low byte of a character's codepoint takes part in hashing. Equality checks always use
//!   the full key.
//!
//! ## Examples
//! ```rust
//! use vega_core::collections::HashTable;
//!
//! let mut table = HashTable::new();
//! table.put("answer", 41);
//! table.put("answer", 42);
//! assert_eq!(table.get("answer"), Some(&42));
//! assert_eq!(table.len(), 1);
//! ```

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};

use thiserror::Error;

/// Number of buckets in every [`HashTable`].
pub const BUCKET_COUNT: usize = 256;

/// Raised by [`HashTable::with_diffusion`] when the supplied table is not a permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("diffusion table is not a permutation of 0..=255 (value {value} appears {count} times)")]
pub struct DiffusionTableError {
    pub value: u8,
    pub count: usize,
}

#[derive(Debug, Clone)]
struct Entry<V> {
    key: String,
    data: V,
    next: Option<usize>,
}

/// String-keyed associative table with 256 chained buckets.
#[derive(Debug, Clone)]
pub struct HashTable<V> {
    diffusion: [u8; BUCKET_COUNT],
    buckets: [Option<usize>; BUCKET_COUNT],
    entries: Vec<Entry<V>>,
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashTable<V> {
    /// Create an empty table with a freshly drawn diffusion table.
    pub fn new() -> Self {
        Self::from_permutation(random_permutation())
    }

    /// Create an empty table with a caller-supplied diffusion table.
    ///
    /// ## Errors
    /// Returns [`DiffusionTableError`] if `diffusion` is not a permutation of `0..=255`.
    pub fn with_diffusion(diffusion: [u8; BUCKET_COUNT]) -> Result<Self, DiffusionTableError> {
        let mut seen = [0usize; BUCKET_COUNT];
        for &value in &diffusion {
            seen[value as usize] += 1;
        }
        if let Some((value, &count)) = seen.iter().enumerate().find(|(_, count)| **count != 1) {
            return Err(DiffusionTableError {
                value: value as u8,
                count,
            });
        }
        Ok(Self::from_permutation(diffusion))
    }

    fn from_permutation(diffusion: [u8; BUCKET_COUNT]) -> Self {
        Self {
            diffusion,
            buckets: [None; BUCKET_COUNT],
            entries: Vec::new(),
        }
    }

    /// Return the bucket index `key` hashes to in this table.
    pub fn bucket_of(&self, key: &str) -> usize {
        key.chars().fold(0u8, |h, c| {
            let mixed = (u32::from(h) ^ u32::from(c)) & 0xFF;
            self.diffusion[mixed as usize]
        }) as usize
    }

    /// Return the data stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.find(key).map(|index| &self.entries[index].data)
    }

    /// Return mutable access to the data stored under `key`, if any.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.find(key).map(|index| &mut self.entries[index].data)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Insert or overwrite `key`.
    ///
    /// An existing key keeps its position in the chain and only its data is replaced. A new key is
    /// appended to the tail of its bucket's chain.
    pub fn put(&mut self, key: impl Into<String>, data: V) {
        let key = key.into();
        let bucket = self.bucket_of(&key);

        let Some(mut index) = self.buckets[bucket] else {
            let new_index = self.push_entry(key, data);
            self.buckets[bucket] = Some(new_index);
            return;
        };

        loop {
            let entry = &mut self.entries[index];
            if entry.key == key {
                entry.data = data;
                return;
            }
            match entry.next {
                Some(next) => index = next,
                None => break,
            }
        }

        let new_index = self.push_entry(key, data);
        self.entries[index].next = Some(new_index);
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, data)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|entry| (entry.key.as_str(), &entry.data))
    }

    /// Iterate over the chain of one bucket, head first.
    #[cfg(test)]
    fn chain(&self, bucket: usize) -> impl Iterator<Item = (&str, &V)> {
        let mut cursor = self.buckets.get(bucket).copied().flatten();
        std::iter::from_fn(move || {
            let entry = &self.entries[cursor?];
            cursor = entry.next;
            Some((entry.key.as_str(), &entry.data))
        })
    }

    fn find(&self, key: &str) -> Option<usize> {
        let mut cursor = self.buckets[self.bucket_of(key)];
        while let Some(index) = cursor {
            let entry = &self.entries[index];
            if entry.key == key {
                return Some(index);
            }
            cursor = entry.next;
        }
        None
    }

    fn push_entry(&mut self, key: String, data: V) -> usize {
        self.entries.push(Entry { key, data, next: None });
        self.entries.len() - 1
    }
}

/// Draw a uniformly shuffled permutation of `0..=255` (Fisher-Yates over a xorshift stream).
fn random_permutation() -> [u8; BUCKET_COUNT] {
    let mut table: [u8; BUCKET_COUNT] = std::array::from_fn(|i| i as u8);
    // `RandomState` is keyed per instance, which gives each table its own seed.
    let mut state = RandomState::new().build_hasher().finish() | 1;
    for i in (1..BUCKET_COUNT).rev() {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let j = (state % (i as u64 + 1)) as usize;
        table.swap(i, j);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn identity() -> [u8; BUCKET_COUNT] {
        std::array::from_fn(|i| i as u8)
    }

    #[test]
    fn test_put_and_get() {
        let mut table = HashTable::new();
        table.put("foo", "Hello World");
        assert_eq!(table.get("foo"), Some(&"Hello World"));
        assert_eq!(table.get("bar"), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_overwrite_keeps_length() {
        let mut table = HashTable::new();
        table.put("foo", "Hello World");
        table.put("foo", "Hello Mars");
        assert_eq!(table.get("foo"), Some(&"Hello Mars"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_collision_chains_both_keys() {
        // With the identity permutation the hash is the XOR of all codepoints.
        let mut table = HashTable::with_diffusion(identity()).unwrap();
        assert_eq!(table.bucket_of("ab"), table.bucket_of("ba"));

        table.put("ab", "Hello World");
        table.put("ba", "Hello Jupiter");

        assert_eq!(table.get("ab"), Some(&"Hello World"));
        assert_eq!(table.get("ba"), Some(&"Hello Jupiter"));
        assert_eq!(table.len(), 2);

        let chain: Vec<_> = table.chain(table.bucket_of("ab")).map(|(k, _)| k).collect();
        assert_eq!(chain, vec!["ab", "ba"]);
    }

    #[test]
    fn test_overwrite_inside_chain_keeps_order() {
        let mut table = HashTable::with_diffusion(identity()).unwrap();
        table.put("ab", 1);
        table.put("ba", 2);
        table.put("ab", 3);

        let chain: Vec<_> = table.chain(table.bucket_of("ab")).collect();
        assert_eq!(chain, vec![("ab", &3), ("ba", &2)]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_empty_key_hashes_to_zero() {
        let mut table = HashTable::new();
        assert_eq!(table.bucket_of(""), 0);
        table.put("", 7);
        assert_eq!(table.get(""), Some(&7));
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut table = HashTable::new();
        table.put("count", 1);
        if let Some(count) = table.get_mut("count") {
            *count += 1;
        }
        assert_eq!(table.get("count"), Some(&2));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_rejects_non_permutation() {
        let mut diffusion = identity();
        diffusion[1] = 0;
        let err = HashTable::<()>::with_diffusion(diffusion).unwrap_err();
        assert_eq!(err.value, 0);
        assert_eq!(err.count, 2);
    }

    #[test]
    fn test_random_permutation_is_a_permutation() {
        let perm = random_permutation();
        assert!(HashTable::<()>::with_diffusion(perm).is_ok());
    }

    #[test]
    fn test_iter_in_insertion_order() {
        let mut table = HashTable::new();
        table.put("z", 1);
        table.put("a", 2);
        table.put("z", 3);
        let pairs: Vec<_> = table.iter().collect();
        assert_eq!(pairs, vec![("z", &3), ("a", &2)]);
    }

    proptest! {
        #[test]
        fn prop_last_write_wins(ops in proptest::collection::vec(("[a-d]{0,3}", any::<i32>()), 0..64)) {
            let mut table = HashTable::new();
            let mut model = HashMap::new();
            for (key, value) in &ops {
                table.put(key.clone(), *value);
                model.insert(key.clone(), *value);
            }
            prop_assert_eq!(table.len(), model.len());
            for (key, value) in &model {
                prop_assert_eq!(table.get(key), Some(value));
            }
        }
    }
}
