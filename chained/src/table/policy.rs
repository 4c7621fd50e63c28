//! Sizing constants and the resize policy of [`super::ChainedHashTable`].

/// Number of buckets of a table built without an explicit capacity.
pub const DEFAULT_CAPACITY: usize = 10;

/// Factor by which the number of buckets grows on every resize.
pub const GROWTH_FACTOR: usize = 2;

/// The maximum load factor is `LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR`.
pub const LOAD_FACTOR_NUMERATOR: usize = 3;
pub const LOAD_FACTOR_DENOMINATOR: usize = 4;

/// Check whether a table holding `len` keys in `capacity` buckets exceeds the maximum load factor
/// and has to grow before the insert that produced `len` is complete.
///
/// Evaluated in integer arithmetic, so for `capacity == 10` the threshold is exactly `7.5`.
#[inline]
pub const fn should_grow(len: usize, capacity: usize) -> bool {
    (len as u128) * (LOAD_FACTOR_DENOMINATOR as u128)
        > (capacity as u128) * (LOAD_FACTOR_NUMERATOR as u128)
}

/// Number of buckets after growing a table with `capacity` buckets.
#[inline]
pub const fn grown_capacity(capacity: usize) -> usize {
    capacity.saturating_mul(GROWTH_FACTOR)
}
