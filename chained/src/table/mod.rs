//! A chained hash table with load-factor driven rehashing.
//!
//! Every bucket is a short [`Vec`] of keys that share an index. Once an insert leaves the table
//! with more than 3/4 keys per bucket, the number of buckets doubles and every key is placed
//! again according to the new number of buckets.
mod bucket;
pub use bucket::*;
mod core;
pub use self::core::*;
mod ctors;
mod fmt;
mod hash_table;
mod iter;
pub use iter::*;
pub mod policy;
