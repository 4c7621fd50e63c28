//! Implements [`Debug`] and [`Display`] for [`ChainedHashTable`].
use super::ChainedHashTable;
use chained_core::Hasher;
use std::fmt::{Debug, Display, Formatter};

struct DisplayBucket<'a, K>(&'a [K]);

impl<K: Debug> Debug for DisplayBucket<'_, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.0).finish()
    }
}

/// Renders the buckets as a list of lists, e.g. `[["banana"], [], ...]`.
impl<K: Eq + Debug, H: Hasher<K>> Display for ChainedHashTable<K, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.buckets.iter().map(|b| DisplayBucket(b.as_slice())))
            .finish()
    }
}

impl<K, H> Debug for ChainedHashTable<K, H>
where
    K: Eq + Debug,
    H: Hasher<K> + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainedHashTable")
            .field("len", &self.len)
            .field("capacity", &self.buckets.len())
            .field("hasher", &self.hasher)
            .field("buckets", &self.buckets)
            .finish()
    }
}
