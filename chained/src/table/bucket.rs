//! Declares [`Bucket`], a single chain of the table.
use chained_core::Push;

/// An ordered chain of keys that share a bucket index. Never holds two equal keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket<K> {
    keys: Vec<K>,
}

impl<K> Default for Bucket<K> {
    fn default() -> Self {
        Self { keys: Vec::new() }
    }
}

impl<K: Eq> Bucket<K> {
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    #[inline]
    pub fn find(&self, key: &K) -> Option<&K> {
        self.keys.iter().find(|k| *k == key)
    }

    /// Append `key` unless an equal key is already in the chain.
    pub fn insert(&mut self, key: K) -> Push {
        if self.contains(&key) {
            return Push::DuplicateIgnored;
        }
        self.keys.push(key);
        Push::Inserted
    }

    /// Remove the key equal to `key`, preserving the order of the rest of the chain.
    pub fn remove(&mut self, key: &K) -> Option<K> {
        let position = self.keys.iter().position(|k| k == key)?;
        Some(self.keys.remove(position))
    }
}

impl<K> Bucket<K> {
    /// Append `key` without looking for duplicates. Used by rehashing, where every key is already
    /// known to be unique.
    #[inline]
    pub(crate) fn push_unchecked(&mut self, key: K) {
        self.keys.push(key);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[K] {
        &self.keys
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.keys.iter()
    }

    #[inline]
    pub(crate) fn into_keys(self) -> std::vec::IntoIter<K> {
        self.keys.into_iter()
    }
}
