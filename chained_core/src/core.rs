//! Core trait and type declarations for the whole project.

/// Hasher for the specific data-type.
///
/// Differs from [`std::hash::Hasher`] in the way that it is specific for a certain type and is not
/// supposed to be universal. An instance is fully determined by its [`Hasher::State`], so two
/// hashers built from equal states always agree.
pub trait Hasher<T>
where
    Self: Default + Clone,
    T: Eq + ?Sized,
{
    /// State of the hasher instance.
    ///
    /// Usually contains seed-values. The [`Default`] state must be fixed, so that default-built
    /// hashers are reproducible across runs.
    type State: Clone + Default;

    /// Create a new hasher with a given `seed`.
    fn from_seed(seed: u64) -> Self;

    /// Create a new hasher from the given `state`.
    fn from_state(state: Self::State) -> Self;

    /// Get the state of the hasher.
    fn state(&self) -> &Self::State;

    /// Hash the given `value`.
    ///
    /// Reduction of the hash into a bucket index is up to the caller.
    fn hash(&self, value: &T) -> u64;
}

/// Outcome of inserting a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Push {
    /// The key was absent and is now stored.
    Inserted,
    /// An equal key is already stored, nothing changed.
    DuplicateIgnored,
}

impl Push {
    /// Check whether the key was stored by this push.
    #[inline]
    pub const fn is_inserted(&self) -> bool {
        matches!(self, Push::Inserted)
    }

    /// Check whether the push was ignored because an equal key is already stored.
    #[inline]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Push::DuplicateIgnored)
    }
}

/// A mutable hash table that stores keys without associated values.
///
/// Missing keys are reported as [`None`], a duplicate insert as [`Push::DuplicateIgnored`].
/// Neither is an error and the table stays usable after both.
pub trait KeyTable<K: Eq, H: Hasher<K>> {
    /// Get the stored key equal to `key`.
    fn find(&self, key: &K) -> Option<&K>;

    /// Insert `key` unless an equal key is already stored.
    fn push(&mut self, key: K) -> Push;

    /// Remove the key equal to `key` and return it.
    fn pop(&mut self, key: &K) -> Option<K>;

    /// Check whether the table stores a key equal to `key`.
    fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Get the number of keys in the table.
    fn len(&self) -> usize;

    /// Check if the table is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the number of buckets.
    fn capacity(&self) -> usize;

    /// Get the load factor of the table.
    fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    /// Get the number of collisions in the table.
    fn num_collisions(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_predicates() {
        assert!(Push::Inserted.is_inserted());
        assert!(!Push::Inserted.is_duplicate());
        assert!(Push::DuplicateIgnored.is_duplicate());
        assert!(!Push::DuplicateIgnored.is_inserted());
    }
}
