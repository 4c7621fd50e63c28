//! Error definitions.
use thiserror::Error;

/// Project-wise error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainedError {
    /// Occurs during construction of a hash table when the requested number of buckets is not
    /// positive.
    #[error("Unable to create a hash table with {capacity} buckets, capacity must be positive.")]
    InvalidCapacity { capacity: usize },
}
