//! Empirical distribution tests of the hashers combined with [`bucket_index`].
use crate::hashing::common::bucket_index;
use crate::hashing::hashers::{FNVHasher, MSPHasher};
use chained_core::Hasher;
use chained_testing::*;
use rand::prelude::*;
use rand_chacha::ChaCha20Rng;

/// Capacities a table starting at 10 buckets goes through.
const CAPACITIES: [usize; 5] = [10, 20, 40, 80, 160];

fn assert_every_bucket_used<K, H: Hasher<K>>(hasher: &H, keys: &[K], num_buckets: usize)
where
    K: Eq,
{
    let counts = bucket_counts(keys, num_buckets, |k| bucket_index(hasher.hash(k), num_buckets));
    assert!(
        counts.iter().all(|&c| c > 0.0),
        "Some of {} buckets stay empty: {:?}",
        num_buckets,
        counts
    );
}

#[test]
fn test_fnv_strings_use_every_bucket() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let keys = generate_keys::<_, String>(&mut rng, 100 * CAPACITIES[4]);
    let hasher = FNVHasher::<String>::default();
    for num_buckets in CAPACITIES {
        assert_every_bucket_used(&hasher, &keys, num_buckets);
    }
}

#[test]
fn test_fnv_sequential_integers_use_every_bucket() {
    let keys = (0..100 * CAPACITIES[4] as u64).collect::<Vec<_>>();
    let hasher = FNVHasher::<u64>::default();
    for num_buckets in CAPACITIES {
        assert_every_bucket_used(&hasher, &keys, num_buckets);
    }
}

#[test]
fn test_msp_sequential_integers_use_every_bucket() {
    let keys = (0..100 * CAPACITIES[4] as u32).collect::<Vec<_>>();
    let hasher = MSPHasher::<u32>::from_seed(17);
    for num_buckets in CAPACITIES {
        assert_every_bucket_used(&hasher, &keys, num_buckets);
    }
}

fn uniformity_trials<K, H>(keys_of: impl Fn(&mut ChaCha20Rng) -> Vec<K>, num_buckets: usize)
where
    K: Eq,
    H: Hasher<K>,
{
    let mut rng = ChaCha20Rng::from_os_rng();
    let p_values = (0..200)
        .map(|_| {
            let hasher = H::from_seed(rng.next_u64());
            let keys = keys_of(&mut rng);
            bucket_uniformity(&keys, num_buckets, |k| {
                bucket_index(hasher.hash(k), num_buckets)
            })
            .p_value
        })
        .collect::<Vec<_>>();

    let aggregation = aggregate_p_values(&p_values, 0.01);
    assert!(aggregation.outcome, "{:?}", aggregation);
}

#[test]
#[cfg_attr(not(feature = "_slow-tests"), ignore)]
fn test_fnv_string_uniformity() {
    for num_buckets in CAPACITIES {
        uniformity_trials::<String, FNVHasher<String>>(
            |rng| generate_keys(rng, 50 * num_buckets),
            num_buckets,
        );
    }
}

#[test]
#[cfg_attr(not(feature = "_slow-tests"), ignore)]
fn test_msp_u64_uniformity() {
    for num_buckets in CAPACITIES {
        uniformity_trials::<u64, MSPHasher<u64>>(
            |rng| generate_keys(rng, 50 * num_buckets),
            num_buckets,
        );
    }
}
