//! Multiply-shift hashing for integer keys, after [Dietzfelbinger et al. (1997)] and
//! [Thorup (2015)].
//!
//! Every function here returns the 32 high bits of a 64-bit multiply-add. Those bits are the
//! well-distributed ones, so they are widened to `u64` and then reduced by the table with a plain
//! modulo, which keeps the scheme usable with bucket counts that are not powers of two.
//!
//! [Dietzfelbinger et al. (1997)]: https://doi.org/10.1006/jagm.1997.0873
//! [Thorup (2015)]: https://doi.org/10.48550/arXiv.1504.06804

use crate::hashing::common::extract_bits_64;

/// Number of output bits of every function in this module.
pub const HASH_BITS: u32 = 32;

/// Hashes a 32-bit unsigned integer.
///
/// # Parameters
///
/// - `value`: The input value.
/// - `seed`: Random seed. The first element must be odd.
#[inline]
pub const fn multiply_shift(value: u32, seed: &[u64; 2]) -> u32 {
    debug_assert!(seed[0] & 1 == 1, r#""seed[0]" must be odd"#);

    let hash = seed[0].wrapping_mul(value as u64).wrapping_add(seed[1]);
    extract_bits_64::<{ u64::BITS }>(hash, HASH_BITS)
}

/// Hashes a 64-bit unsigned integer by treating it as a pair of 32-bit halves.
#[inline]
pub const fn pair_multiply_shift(value: u64, seed: &[u64; 3]) -> u32 {
    let hash = seed[0]
        .wrapping_add(value)
        .wrapping_mul(seed[1].wrapping_add(value >> 32))
        .wrapping_add(seed[2]);

    extract_bits_64::<{ u64::BITS }>(hash, HASH_BITS)
}

/// Hashes a vector of 64-bit unsigned integers.
///
/// # Parameters
///
/// - `value`: The input vector.
/// - `seed`: Random seed, must hold at least `value.len() * 2 + 1` elements.
#[inline]
pub fn pair_multiply_shift_vector_u64(value: &[u64], seed: &[u64]) -> u32 {
    debug_assert!(
        value.len() * 2 + 1 <= seed.len(),
        r#""seed" must be twice as long as the input "value" + 1"#,
    );

    let (first, pairs) = seed.split_at(1);
    let sum = value
        .iter()
        .zip(pairs.chunks_exact(2))
        .fold(first[0], |sum, (&v, s)| {
            sum.wrapping_add(s[0].wrapping_add(v >> 32).wrapping_mul(s[1].wrapping_add(v)))
        });

    extract_bits_64::<{ u64::BITS }>(sum, HASH_BITS)
}
