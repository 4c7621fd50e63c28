//! Implements Hasher for integer types using the [`multiply_shift`] family.
//!
//! [`multiply_shift`]: crate::hashing::multiply_shift
use crate::hashing::multiply_shift::{
    multiply_shift, pair_multiply_shift, pair_multiply_shift_vector_u64,
};
use chained_core::Hasher;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

/// Seed material for every supported integer width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MSPState {
    seed_32: [u64; 2],
    seed_64: [u64; 3],
    seed_128: [u64; 5],
}

impl MSPState {
    /// Expand `seed` into multiplier and increment values.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut seed_32: [u64; 2] = rng.random();
        // Multiply-shift over 32-bit keys needs an odd multiplier.
        seed_32[0] |= 1;

        Self {
            seed_32,
            seed_64: rng.random(),
            seed_128: rng.random(),
        }
    }
}

impl Default for MSPState {
    fn default() -> Self {
        Self::from_seed(0)
    }
}

#[inline]
fn hash_32(state: &MSPState, value: u32) -> u64 {
    multiply_shift(value, &state.seed_32) as u64
}

#[inline]
fn hash_64(state: &MSPState, value: u64) -> u64 {
    pair_multiply_shift(value, &state.seed_64) as u64
}

#[inline]
fn hash_128(state: &MSPState, value: u128) -> u64 {
    let words = [value as u64, (value >> 64) as u64];
    pair_multiply_shift_vector_u64(&words, &state.seed_128) as u64
}

/// Hasher based on multiply-shift hashing.
pub struct MSPHasher<T> {
    state: MSPState,
    key_type: PhantomData<fn(&T)>,
}

impl<T> Clone for MSPHasher<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MSPHasher<T> {}

impl<T> Default for MSPHasher<T> {
    fn default() -> Self {
        Self {
            state: MSPState::default(),
            key_type: PhantomData,
        }
    }
}

impl<T> Debug for MSPHasher<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MSPHasher")
            .field("state", &self.state)
            .finish()
    }
}

macro_rules! impl_msp_hasher {
    ($hash_fn:ident: $($type:ty as $unsigned:ty),*) => {
        $(
            impl Hasher<$type> for MSPHasher<$type> {
                type State = MSPState;

                fn from_seed(seed: u64) -> Self {
                    Self::from_state(MSPState::from_seed(seed))
                }
                fn from_state(state: MSPState) -> Self {
                    Self { state, key_type: PhantomData }
                }
                fn state(&self) -> &Self::State {
                    &self.state
                }
                fn hash(&self, value: &$type) -> u64 {
                    $hash_fn(&self.state, (*value as $unsigned).into())
                }
            }
        )*
    };
}

impl_msp_hasher!(hash_32: u8 as u8, i8 as u8, u16 as u16, i16 as u16, u32 as u32, i32 as u32);
impl_msp_hasher!(hash_64: u64 as u64, i64 as u64);
impl_msp_hasher!(hash_128: u128 as u128, i128 as u128);

// Pointer-sized integers hash as 64-bit ones, so the hash does not depend on the platform.
impl_msp_hasher!(hash_64: usize as u64, isize as u64);
