//! Implements [`KeyTable`] for [`ChainedHashTable`].
use super::core::empty_buckets;
use super::policy::{grown_capacity, should_grow};
use super::ChainedHashTable;
use chained_core::{Hasher, KeyTable, Push};
use log::{debug, trace};
use std::mem;

impl<K: Eq, H: Hasher<K>> KeyTable<K, H> for ChainedHashTable<K, H> {
    fn find(&self, key: &K) -> Option<&K> {
        self.buckets[self.index_of(key)].find(key)
    }

    fn push(&mut self, key: K) -> Push {
        let index = self.index_of(&key);
        let outcome = self.buckets[index].insert(key);

        match outcome {
            Push::Inserted => {
                self.len += 1;
                if should_grow(self.len, self.capacity()) {
                    self.grow();
                }
            }
            Push::DuplicateIgnored => {
                trace!("Ignoring duplicate key in bucket {}", index);
            }
        }
        outcome
    }

    fn pop(&mut self, key: &K) -> Option<K> {
        let index = self.index_of(key);
        let removed = self.buckets[index].remove(key)?;
        self.len -= 1;
        Some(removed)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn num_collisions(&self) -> usize {
        self.buckets
            .iter()
            .map(|b| b.len().saturating_sub(1))
            .sum()
    }
}

impl<K: Eq, H: Hasher<K>> ChainedHashTable<K, H> {
    /// Multiply the number of buckets by the growth factor and place every key again.
    ///
    /// Keys are moved, not cloned, and each is hashed exactly once. The table is never observable
    /// half-way through.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = grown_capacity(old_capacity);
        let old_len = self.len;

        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        self.len = 0;

        for key in old_buckets.into_vec().into_iter().flat_map(|b| b.into_keys()) {
            let index = self.index_of(&key);
            self.buckets[index].push_unchecked(key);
            self.len += 1;
        }

        debug_assert_eq!(self.len, old_len, "Rehashing must neither drop nor duplicate keys");
        debug!(
            "Rehashed {} keys from {} to {} buckets",
            self.len, old_capacity, new_capacity
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::hashers::{FNVHasher, MSPHasher};
    use crate::table::policy::DEFAULT_CAPACITY;
    use chained_testing::init_test_logger;
    use std::collections::HashSet;

    /// Check every structural invariant of the table.
    fn assert_invariants<K, H>(table: &ChainedHashTable<K, H>)
    where
        K: Eq + std::hash::Hash + std::fmt::Debug,
        H: Hasher<K>,
    {
        assert!(table.capacity() > 0);
        assert_eq!(
            table.len(),
            table.buckets().iter().map(|b| b.len()).sum::<usize>(),
            "Length must equal the sum of the bucket lengths"
        );

        let mut seen = HashSet::new();
        for (index, bucket) in table.buckets().iter().enumerate() {
            for key in bucket.iter() {
                assert!(seen.insert(key), "Key {:?} is stored twice", key);
                assert_eq!(
                    table.index_of(key),
                    index,
                    "Key {:?} is stored in the wrong bucket",
                    key
                );
            }
        }
    }

    #[test]
    fn test_push_and_find() {
        let mut table: ChainedHashTable<&str> = ChainedHashTable::new();
        assert_eq!(table.push("a"), Push::Inserted);
        assert_eq!(table.push("b"), Push::Inserted);

        assert_eq!(table.find(&"a"), Some(&"a"));
        assert_eq!(table.find(&"b"), Some(&"b"));
        assert_eq!(table.find(&"c"), None);
        assert_eq!(table.len(), 2);
        assert_invariants(&table);
    }

    #[test]
    fn test_duplicate_push_is_ignored() {
        let mut table: ChainedHashTable<&str> = ChainedHashTable::new();
        assert_eq!(table.push("a"), Push::Inserted);
        assert_eq!(table.push("a"), Push::DuplicateIgnored);
        assert_eq!(table.len(), 1);
        assert_eq!(table.find(&"a"), Some(&"a"));
        assert_invariants(&table);
    }

    #[test]
    fn test_pop_existing() {
        let mut table: ChainedHashTable<&str> = ChainedHashTable::new();
        table.push("a");
        assert_eq!(table.pop(&"a"), Some("a"));
        assert_eq!(table.find(&"a"), None);
        assert_eq!(table.len(), 0);
        assert_invariants(&table);
    }

    #[test]
    fn test_pop_missing_on_empty_table() {
        let mut table: ChainedHashTable<&str> = ChainedHashTable::new();
        assert_eq!(table.pop(&"missing"), None);
        assert_eq!(table.len(), 0);
        assert_eq!(table.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_eighth_push_doubles_capacity() {
        init_test_logger();

        let keys = ["k0", "k1", "k2", "k3", "k4", "k5", "k6", "k7"];
        let mut table: ChainedHashTable<&str> = ChainedHashTable::new();
        for (i, key) in keys.iter().enumerate() {
            assert_eq!(table.capacity(), DEFAULT_CAPACITY, "Resized before push #{}", i + 1);
            assert_eq!(table.push(*key), Push::Inserted);
        }

        assert_eq!(table.capacity(), 20);
        assert_eq!(table.len(), 8);
        for key in keys {
            assert_eq!(table.find(&key), Some(&key));
        }
        assert_invariants(&table);
    }

    #[test]
    fn test_pop_never_shrinks() {
        let mut table: ChainedHashTable<u32> = ChainedHashTable::new();
        for key in 0..100 {
            table.push(key);
        }
        let capacity = table.capacity();
        for key in 0..100 {
            assert_eq!(table.pop(&key), Some(key));
            assert_eq!(table.capacity(), capacity);
        }
        assert!(table.is_empty());
        assert_invariants(&table);
    }

    #[test]
    fn test_invariants_hold_across_many_resizes() {
        init_test_logger();

        let mut table =
            ChainedHashTable::<u64, MSPHasher<u64>>::with_seed(1, 0x5eed).unwrap();
        let mut last_capacity = table.capacity();

        for key in 0..2000_u64 {
            assert!(table.push(key * 7919).is_inserted());
            assert!(table.capacity() >= last_capacity);
            assert!(table.load_factor() <= 0.75, "Load factor {}", table.load_factor());
            last_capacity = table.capacity();

            if key % 3 == 0 {
                assert_eq!(table.pop(&(key * 7919)), Some(key * 7919));
            }
        }

        assert_invariants(&table);
        for key in 0..2000_u64 {
            let expected = (key % 3 != 0).then_some(key * 7919);
            assert_eq!(table.find(&(key * 7919)).copied(), expected);
        }
    }

    #[test]
    fn test_capacity_one_grows_immediately() {
        let mut table = ChainedHashTable::<char, FNVHasher<char>>::with_capacity(1).unwrap();
        table.push('x');
        assert_eq!(table.capacity(), 2);
        table.push('y');
        assert_eq!(table.capacity(), 4);
        table.push('z');
        assert_eq!(table.capacity(), 4);
        assert_invariants(&table);
    }

    #[test]
    fn test_num_collisions() {
        let mut table = ChainedHashTable::<u8, FNVHasher<u8>>::with_capacity(1000).unwrap();
        assert_eq!(table.num_collisions(), 0);
        for key in 0..=255 {
            table.push(key);
        }
        let expected = table
            .buckets()
            .iter()
            .filter(|b| !b.is_empty())
            .map(|b| b.len() - 1)
            .sum::<usize>();
        assert_eq!(table.num_collisions(), expected);
        assert_eq!(table.capacity(), 1000);
    }
}
