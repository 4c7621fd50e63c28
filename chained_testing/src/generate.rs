//! Random key generation for tests.
use rand::distr::Alphanumeric;
use rand::Rng;
use std::collections::HashSet;
use std::hash::Hash;

/// Provides capabilities to generate random values of the implementer-type.
pub trait Generate<R: Rng>: Sized {
    /// Parameters for data-generation specific for the type.
    type GenerateParams: Default;

    /// Generates a single random value of the type.
    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self;

    /// Generates `size` **unique** random values of the type.
    ///
    /// # Notes
    ///
    /// - Never returns if `params` admit fewer than `size` distinct values.
    fn generate_many(rng: &mut R, params: &Self::GenerateParams, size: usize) -> Vec<Self>
    where
        Self: Hash + Eq + Clone,
    {
        let mut seen = HashSet::with_capacity(size);
        let mut values = Vec::with_capacity(size);
        while values.len() < size {
            let value = Self::generate(rng, params);
            if seen.insert(value.clone()) {
                values.push(value);
            }
        }
        values
    }
}

/// Inclusive range for numeric values.
pub struct NumParams<T> {
    pub min: T,
    pub max: T,
}

macro_rules! impl_generate_num {
    ($($type:ty),*) => {
        $(
            impl Default for NumParams<$type> {
                fn default() -> Self {
                    Self { min: <$type>::MIN, max: <$type>::MAX }
                }
            }

            impl<R: Rng> Generate<R> for $type {
                type GenerateParams = NumParams<$type>;

                fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
                    rng.random_range(params.min..=params.max)
                }
            }
        )*
    };
}

impl_generate_num!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize);

impl Default for NumParams<isize> {
    fn default() -> Self {
        Self {
            min: isize::MIN,
            max: isize::MAX,
        }
    }
}

// `rand` has no uniform sampler for `isize`, so sample over `i64` instead.
impl<R: Rng> Generate<R> for isize {
    type GenerateParams = NumParams<isize>;

    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
        rng.random_range(params.min as i64..=params.max as i64) as isize
    }
}

/// Length range for alphanumeric strings.
pub struct StringParams {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for StringParams {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 32,
        }
    }
}

impl<R: Rng> Generate<R> for String {
    type GenerateParams = StringParams;

    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
        let length = rng.random_range(params.min_length..=params.max_length);
        rng.sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }
}

/// Generate `size` unique keys with default parameters.
pub fn generate_keys<R, K>(rng: &mut R, size: usize) -> Vec<K>
where
    R: Rng,
    K: Generate<R> + Hash + Eq + Clone,
{
    K::generate_many(rng, &K::GenerateParams::default(), size)
}

/// Generate a key that is not among `existing`.
pub fn generate_absent_key<R, K>(rng: &mut R, existing: &HashSet<K>) -> K
where
    R: Rng,
    K: Generate<R> + Hash + Eq,
{
    loop {
        let key = K::generate(rng, &K::GenerateParams::default());
        if !existing.contains(&key) {
            return key;
        }
    }
}
