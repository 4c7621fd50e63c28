//! Declares core types for [`ChainedHashTable`].
use super::Bucket;
use crate::hashing::common::bucket_index;
use crate::hashing::hashers::FNVHasher;
use chained_core::Hasher;

/// Hash table that stores keys in chains of colliding keys and grows as it fills up.
///
/// # Guarantees
///
/// - Every stored key sits in bucket `hash(key) % capacity()` for the current capacity.
/// - After every completed [`push`] the load factor is at most 3/4.
/// - The number of buckets never decreases.
///
/// # Examples
///
/// ```rust
/// use chained::table::ChainedHashTable;
/// use chained_core::KeyTable;
///
/// let mut table: ChainedHashTable<u64> = ChainedHashTable::new();
/// for key in 0..8 {
///     table.push(key);
/// }
///
/// // The 8th key pushed the load factor above 3/4.
/// assert_eq!(table.capacity(), 20);
/// assert!((0..8).all(|key| table.find(&key) == Some(&key)));
/// ```
///
/// [`push`]: chained_core::KeyTable::push
#[derive(Clone)]
pub struct ChainedHashTable<K: Eq, H: Hasher<K> = FNVHasher<K>> {
    pub(super) hasher: H,
    pub(super) buckets: Box<[Bucket<K>]>,
    pub(super) len: usize,
}

impl<K: Eq, H: Hasher<K>> ChainedHashTable<K, H> {
    /// Get the hasher that places keys into buckets.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Get the buckets in index order.
    pub fn buckets(&self) -> &[Bucket<K>] {
        &self.buckets
    }

    /// Compute the bucket index of `key` for the current number of buckets.
    #[inline]
    pub fn index_of(&self, key: &K) -> usize {
        bucket_index(self.hasher.hash(key), self.buckets.len())
    }
}

/// Allocate `capacity` empty buckets.
pub(super) fn empty_buckets<K>(capacity: usize) -> Box<[Bucket<K>]> {
    (0..capacity).map(|_| Bucket::default()).collect()
}
