//! Implements constructors for [`ChainedHashTable`].
use super::core::empty_buckets;
use super::policy::DEFAULT_CAPACITY;
use super::ChainedHashTable;
use chained_core::{ChainedError, Hasher, KeyTable};

impl<K: Eq, H: Hasher<K>> ChainedHashTable<K, H> {
    /// Create an empty table with [`DEFAULT_CAPACITY`] buckets and the default hasher.
    pub fn new() -> Self {
        Self::build(DEFAULT_CAPACITY, H::default())
    }

    /// Create an empty table with `capacity` buckets and the default hasher.
    ///
    /// # Errors
    ///
    /// - [`ChainedError::InvalidCapacity`] if `capacity` is `0`.
    pub fn with_capacity(capacity: usize) -> Result<Self, ChainedError> {
        Self::with_capacity_and_hasher(capacity, H::default())
    }

    /// Create an empty table with `capacity` buckets and a hasher built from `seed`.
    ///
    /// # Errors
    ///
    /// - [`ChainedError::InvalidCapacity`] if `capacity` is `0`.
    pub fn with_seed(capacity: usize, seed: u64) -> Result<Self, ChainedError> {
        Self::with_capacity_and_hasher(capacity, H::from_seed(seed))
    }

    /// Create an empty table with `capacity` buckets that uses `hasher`.
    ///
    /// # Errors
    ///
    /// - [`ChainedError::InvalidCapacity`] if `capacity` is `0`.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: H) -> Result<Self, ChainedError> {
        if capacity == 0 {
            return Err(ChainedError::InvalidCapacity { capacity });
        }
        Ok(Self::build(capacity, hasher))
    }

    fn build(capacity: usize, hasher: H) -> Self {
        debug_assert!(capacity > 0, r#""capacity" must be greater than 0"#);

        Self {
            hasher,
            buckets: empty_buckets(capacity),
            len: 0,
        }
    }
}

impl<K: Eq, H: Hasher<K>> Default for ChainedHashTable<K, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq, H: Hasher<K>> FromIterator<K> for ChainedHashTable<K, H> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K: Eq, H: Hasher<K>> Extend<K> for ChainedHashTable<K, H> {
    /// Push every key, silently skipping duplicates.
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.push(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::hashers::{FNVHasher, MSPHasher};

    #[test]
    fn test_new_uses_default_capacity() {
        let table: ChainedHashTable<&str> = ChainedHashTable::new();
        assert_eq!(table.capacity(), DEFAULT_CAPACITY);
        assert_eq!(table.len(), 0);
        assert!(table.is_empty());
        assert_eq!(table.buckets().len(), DEFAULT_CAPACITY);
        assert!(table.buckets().iter().all(|b| b.is_empty()));
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let result: Result<ChainedHashTable<&str>, _> = ChainedHashTable::with_capacity(0);
        assert_eq!(
            result.err(),
            Some(ChainedError::InvalidCapacity { capacity: 0 })
        );
        assert!(ChainedHashTable::<u64, MSPHasher<u64>>::with_seed(0, 1).is_err());
        assert!(ChainedHashTable::<u64, MSPHasher<u64>>::with_capacity_and_hasher(
            0,
            MSPHasher::default()
        )
        .is_err());
    }

    #[test]
    fn test_with_capacity() {
        for capacity in [1, 3, 10, 1000] {
            let table: ChainedHashTable<u32> = ChainedHashTable::with_capacity(capacity).unwrap();
            assert_eq!(table.capacity(), capacity);
        }
    }

    #[test]
    fn test_with_seed_uses_seeded_hasher() {
        let table = ChainedHashTable::<String, FNVHasher<String>>::with_seed(16, 7).unwrap();
        assert_eq!(*table.hasher().state(), *FNVHasher::<String>::from_seed(7).state());
    }

    #[test]
    fn test_from_iter_skips_duplicates() {
        let table: ChainedHashTable<u8> = [1, 2, 2, 3, 1].into_iter().collect();
        assert_eq!(table.len(), 3);
        assert_eq!(table.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_extend_grows() {
        let mut table: ChainedHashTable<u16> = ChainedHashTable::new();
        table.extend(0..100);
        assert_eq!(table.len(), 100);
        assert!(table.load_factor() <= 0.75);
    }
}
