//! # Chained Hash Table
//!
//! A Rust implementation of a string-keyed hash table using separate chaining.
//!
//! Keys are addressed with a polynomial rolling hash reduced modulo the current bucket count.
//! Keys that collide share a bucket and keep their insertion order. Before an insertion would
//! push the ratio of entries to buckets above the configured load factor, the bucket array
//! doubles and every entry is rehashed.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chained_table::HashTable;
//!
//! // 16 buckets, grow once more than 75% full
//! let mut table = HashTable::new(16, 0.75)?;
//!
//! // Insert values
//! table.set("apple", 1)?;
//! table.set("banana", 2)?;
//!
//! // Retrieve values
//! assert_eq!(table.get("apple")?, Some(&1));
//!
//! // Update values
//! table.set("apple", 10)?;
//! assert_eq!(table.get("apple")?, Some(&10));
//! assert_eq!(table.len(), 2);
//!
//! // Remove values
//! assert!(table.remove("apple")?);
//! assert_eq!(table.get("apple")?, None);
//! # Ok::<(), chained_table::TableError>(())
//! ```
//!
//! ## Ordering
//!
//! [`HashTable::keys`], [`HashTable::values`], [`HashTable::entries`] and [`HashTable::iter`]
//! walk the buckets in index order and each bucket in insertion order. Keys in different
//! buckets come out in no meaningful order, and that order changes after a resize.

/// Construction parameters and defaults
mod config;
/// Error type shared by the crate
mod error;
/// Module implementing the chained hash table
mod hash_table;
pub mod hashing;
/// Utility functions and types for the hash table
mod utils;

pub use config::{DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR, TableConfig};
pub use error::TableError;
pub use hash_table::{HashTable, Iter};
pub use utils::{ChainStats, from_pairs};
