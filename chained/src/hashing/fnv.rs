//! Implementation of the FNV-1a hash function [(Fowler, Noll, Vo)].
//!
//! FNV-1a is not a universal family, but it is fast on short keys, needs no seed material beyond
//! the offset basis and is fully reproducible across runs and platforms, so it serves as the
//! default hash function of [`crate::table::ChainedHashTable`].
//!
//! [(Fowler, Noll, Vo)]: http://www.isthe.com/chongo/tech/comp/fnv/index.html

/// The standard 64-bit FNV offset basis.
pub const FNV_OFFSET_BASIS_64: u64 = 0xcbf2_9ce4_8422_2325;

/// The 64-bit FNV prime.
pub const FNV_PRIME_64: u64 = 0x0000_0100_0000_01b3;

/// Hashes a sequence of bytes with FNV-1a.
///
/// # Parameters
///
/// - `value`: The input bytes.
/// - `basis`: The offset basis. [`FNV_OFFSET_BASIS_64`] yields the reference FNV-1a hash, other
///            values act as a seed.
#[inline]
pub const fn fnv1a_64(value: &[u8], basis: u64) -> u64 {
    let mut hash = basis;
    let mut i = 0;
    while i < value.len() {
        hash ^= value[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME_64);
        i += 1;
    }
    hash
}
