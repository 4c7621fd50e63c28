//! Implements Hasher for integers, strings and byte slices using XXH3-64.
use chained_core::Hasher;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use xxhash_rust::xxh3::xxh3_64_with_seed;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct XXH3State {
    seed: u64,
}

/// Hasher based on XXH3 algorithm.
pub struct XXH3Hasher<T: ?Sized> {
    state: XXH3State,
    key_type: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Clone for XXH3Hasher<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for XXH3Hasher<T> {}

impl<T: ?Sized> Default for XXH3Hasher<T> {
    fn default() -> Self {
        Self {
            state: XXH3State::default(),
            key_type: PhantomData,
        }
    }
}

impl<T: ?Sized> Debug for XXH3Hasher<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XXH3Hasher")
            .field("state", &self.state)
            .finish()
    }
}

macro_rules! impl_xxh3_hasher {
    ($($type:ty => |$value:ident| $bytes:expr),* $(,)?) => {
        $(
            impl Hasher<$type> for XXH3Hasher<$type> {
                type State = XXH3State;

                fn from_seed(seed: u64) -> Self {
                    Self::from_state(XXH3State { seed })
                }
                fn from_state(state: XXH3State) -> Self {
                    Self { state, key_type: PhantomData }
                }
                fn state(&self) -> &Self::State {
                    &self.state
                }
                fn hash(&self, value: &$type) -> u64 {
                    let $value = value;
                    xxh3_64_with_seed($bytes, self.state.seed)
                }
            }
        )*
    };
}

macro_rules! impl_xxh3_hasher_int {
    ($($type:ty),*) => {
        impl_xxh3_hasher!($($type => |value| &value.to_le_bytes()),*);
    };
}

impl_xxh3_hasher_int!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128);

impl_xxh3_hasher!(
    usize => |value| &(*value as u64).to_le_bytes(),
    isize => |value| &(*value as i64).to_le_bytes(),
    String => |value| value.as_bytes(),
    &str => |value| value.as_bytes(),
    &[u8] => |value| value,
    Vec<u8> => |value| value.as_slice(),
);
