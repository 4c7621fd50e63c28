//! Implements Hasher for integers, strings and byte slices using [`fnv1a_64`].
use crate::hashing::fnv::{fnv1a_64, FNV_OFFSET_BASIS_64};
use chained_core::Hasher;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FNVState {
    basis: u64,
}

impl Default for FNVState {
    fn default() -> Self {
        Self {
            basis: FNV_OFFSET_BASIS_64,
        }
    }
}

impl FNVState {
    /// Mix `seed` into the standard offset basis. Seed `0` gives the reference FNV-1a.
    pub const fn from_seed(seed: u64) -> Self {
        Self {
            basis: FNV_OFFSET_BASIS_64 ^ seed,
        }
    }

    /// Get the offset basis the hash starts from.
    pub const fn basis(&self) -> u64 {
        self.basis
    }
}

/// Hasher based on FNV-1a.
pub struct FNVHasher<T: ?Sized> {
    state: FNVState,
    key_type: PhantomData<fn(&T)>,
}

impl<T: ?Sized> FNVHasher<T> {
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        fnv1a_64(bytes, self.state.basis)
    }
}

impl<T: ?Sized> Clone for FNVHasher<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for FNVHasher<T> {}

impl<T: ?Sized> Default for FNVHasher<T> {
    fn default() -> Self {
        Self {
            state: FNVState::default(),
            key_type: PhantomData,
        }
    }
}

impl<T: ?Sized> Debug for FNVHasher<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FNVHasher")
            .field("state", &self.state)
            .finish()
    }
}

macro_rules! impl_fnv_hasher {
    ($($type:ty => |$this:ident, $value:ident| $bytes:expr),* $(,)?) => {
        $(
            impl Hasher<$type> for FNVHasher<$type> {
                type State = FNVState;

                fn from_seed(seed: u64) -> Self {
                    Self::from_state(FNVState::from_seed(seed))
                }
                fn from_state(state: FNVState) -> Self {
                    Self { state, key_type: PhantomData }
                }
                fn state(&self) -> &Self::State {
                    &self.state
                }
                fn hash(&self, value: &$type) -> u64 {
                    let ($this, $value) = (self, value);
                    $this.hash_bytes($bytes)
                }
            }
        )*
    };
}

macro_rules! impl_fnv_hasher_int {
    ($($type:ty),*) => {
        impl_fnv_hasher!($($type => |this, value| &value.to_le_bytes()),*);
    };
}

impl_fnv_hasher_int!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128);

// Pointer-sized integers hash as 64-bit ones, so the hash does not depend on the platform.
impl_fnv_hasher!(
    usize => |this, value| &(*value as u64).to_le_bytes(),
    isize => |this, value| &(*value as i64).to_le_bytes(),
    bool => |this, value| &[*value as u8],
    char => |this, value| &(*value as u32).to_le_bytes(),
    String => |this, value| value.as_bytes(),
    &str => |this, value| value.as_bytes(),
    &[u8] => |this, value| value,
    Vec<u8> => |this, value| value.as_slice(),
);
