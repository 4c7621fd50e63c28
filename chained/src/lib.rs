//! A hash table that resolves collisions by chaining and doubles its number of buckets once the
//! load factor exceeds 3/4.
//!
//! # Examples
//!
//! ```rust
//! use chained::table::ChainedHashTable;
//! use chained_core::{KeyTable, Push};
//!
//! let mut fruits: ChainedHashTable<&str> = ChainedHashTable::new();
//!
//! assert_eq!(fruits.push("apple"), Push::Inserted);
//! assert_eq!(fruits.push("apple"), Push::DuplicateIgnored);
//! assert_eq!(fruits.find(&"apple"), Some(&"apple"));
//! assert_eq!(fruits.pop(&"apple"), Some("apple"));
//! assert_eq!(fruits.find(&"apple"), None);
//! ```
pub mod hashing;
pub mod table;

pub use chained_core::{ChainedError, Hasher, KeyTable, Push};
