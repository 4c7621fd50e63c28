//! Iteration over the keys of a [`ChainedHashTable`].
use super::{Bucket, ChainedHashTable};
use chained_core::Hasher;
use std::iter::FusedIterator;

/// Iterator over the keys of a table, bucket by bucket.
///
/// The order depends on the hasher and on the capacity, so it should not be relied upon.
#[derive(Debug, Clone)]
pub struct Iter<'a, K> {
    buckets: std::slice::Iter<'a, Bucket<K>>,
    current: std::slice::Iter<'a, K>,
    remaining: usize,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(key) = self.current.next() {
                self.remaining -= 1;
                return Some(key);
            }
            self.current = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K: Eq, H: Hasher<K>> ChainedHashTable<K, H> {
    /// Get an iterator over all stored keys.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            buckets: self.buckets.iter(),
            current: Default::default(),
            remaining: self.len,
        }
    }
}

impl<'a, K: Eq, H: Hasher<K>> IntoIterator for &'a ChainedHashTable<K, H> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
