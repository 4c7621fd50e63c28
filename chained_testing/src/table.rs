//! Generic test routines for [`KeyTable`] implementations.
use crate::generate::{generate_absent_key, generate_keys, Generate};
use chained_core::{Hasher, KeyTable, Push};
use rand::Rng;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Maximum load factor every completed push has to respect.
pub const MAX_LOAD_FACTOR: f64 = 0.75;

/// Tests that every pushed key is found and that absent keys are not.
pub fn test_round_trip<R, K, H, T>(rng: &mut R, mut table: T, size: usize)
where
    R: Rng,
    K: Eq + Hash + Clone + Debug + Generate<R>,
    H: Hasher<K>,
    T: KeyTable<K, H>,
{
    let keys = generate_keys::<R, K>(rng, size);
    for key in &keys {
        assert_eq!(table.push(key.clone()), Push::Inserted, "Key: {:?}", key);
    }
    assert_eq!(table.len(), size);

    for key in &keys {
        assert_eq!(table.find(key), Some(key), "Key: {:?}", key);
    }

    let existing: HashSet<K> = keys.into_iter().collect();
    for _ in 0..size.div_ceil(3) {
        let key = generate_absent_key(rng, &existing);
        assert_eq!(table.find(&key), None, "Key: {:?}", key);
    }
}

/// Tests that pushing a key twice stores it once.
pub fn test_duplicates<R, K, H, T>(rng: &mut R, mut table: T, size: usize)
where
    R: Rng,
    K: Eq + Hash + Clone + Debug + Generate<R>,
    H: Hasher<K>,
    T: KeyTable<K, H>,
{
    for (i, key) in generate_keys::<R, K>(rng, size).into_iter().enumerate() {
        assert!(table.push(key.clone()).is_inserted(), "Key: {:?}", key);
        let capacity = table.capacity();
        let outcome = table.push(key.clone());
        assert!(outcome.is_duplicate(), "Key: {:?}, outcome: {:?}", key, outcome);
        assert_eq!(table.len(), i + 1);
        assert_eq!(table.capacity(), capacity, "Duplicate push must not resize");
    }
}

/// Tests that popped keys disappear while the rest stay reachable.
pub fn test_pop<R, K, H, T>(rng: &mut R, mut table: T, size: usize)
where
    R: Rng,
    K: Eq + Hash + Clone + Debug + Generate<R>,
    H: Hasher<K>,
    T: KeyTable<K, H>,
{
    let keys = generate_keys::<R, K>(rng, size);
    for key in &keys {
        table.push(key.clone());
    }
    let capacity = table.capacity();

    let (popped, kept) = keys.split_at(size / 2);
    for key in popped {
        assert_eq!(table.pop(key).as_ref(), Some(key), "Key: {:?}", key);
        assert_eq!(table.pop(key), None, "Key: {:?}", key);
    }

    assert_eq!(table.len(), kept.len());
    assert_eq!(table.capacity(), capacity, "Pop must not resize");
    for key in popped {
        assert_eq!(table.find(key), None, "Key: {:?}", key);
    }
    for key in kept {
        assert_eq!(table.find(key), Some(key), "Key: {:?}", key);
    }
}

/// Tests the growth post-conditions after every push: capacity never decreases, the load factor
/// stays within [`MAX_LOAD_FACTOR`], and all earlier keys stay reachable.
pub fn test_growth<R, K, H, T>(rng: &mut R, mut table: T, size: usize)
where
    R: Rng,
    K: Eq + Hash + Clone + Debug + Generate<R>,
    H: Hasher<K>,
    T: KeyTable<K, H>,
{
    let keys = generate_keys::<R, K>(rng, size);
    let initial_capacity = table.capacity();
    let mut capacity = initial_capacity;
    let mut num_resizes = 0;

    for (i, key) in keys.iter().enumerate() {
        table.push(key.clone());

        assert!(table.capacity() >= capacity, "Capacity decreased");
        if table.capacity() > capacity {
            num_resizes += 1;
            assert!(
                keys[..=i].iter().all(|k| table.find(k) == Some(k)),
                "Keys were lost when growing to {} buckets",
                table.capacity()
            );
        }
        assert!(
            table.load_factor() <= MAX_LOAD_FACTOR,
            "Load factor {} after push #{}",
            table.load_factor(),
            i + 1
        );
        capacity = table.capacity();
    }

    if size as f64 > initial_capacity as f64 * MAX_LOAD_FACTOR {
        assert!(num_resizes > 0, "Expected at least one resize");
    }
}

/// Applies `num_ops` random operations to `table` and to [`HashSet`] and checks that they agree.
///
/// Keys are drawn from a pool of `pool_size` values, so pushes of existing keys and pops of
/// missing ones happen regularly.
pub fn test_against_model<R, K, H, T>(
    rng: &mut R,
    mut table: T,
    pool_size: usize,
    num_ops: usize,
) where
    R: Rng,
    K: Eq + Hash + Clone + Debug + Generate<R>,
    H: Hasher<K>,
    T: KeyTable<K, H>,
{
    let pool = generate_keys::<R, K>(rng, pool_size);
    let mut model = HashSet::new();

    for _ in 0..num_ops {
        let key = &pool[rng.random_range(0..pool.len())];
        match rng.random_range(0..3) {
            0 => {
                let expected = if model.insert(key.clone()) {
                    Push::Inserted
                } else {
                    Push::DuplicateIgnored
                };
                assert_eq!(table.push(key.clone()), expected, "Key: {:?}", key);
            }
            1 => {
                let expected = model.take(key);
                assert_eq!(table.pop(key), expected, "Key: {:?}", key);
            }
            _ => {
                assert_eq!(table.find(key), model.get(key), "Key: {:?}", key);
            }
        }
        assert_eq!(table.len(), model.len());
    }
}

/// Generates tests for a table type for integer keys.
#[macro_export]
macro_rules! generate_table_int_tests {
    ($Table:ident, $Hasher:ident, $type:ident) => {
        compose_idents::compose_idents!(test_fn = [test_table_routines_, $type], {
            #[test]
            fn test_fn() {
                use rand::SeedableRng;
                use rand_chacha::ChaCha20Rng;

                type K = $type;
                type H = $Hasher<$type>;

                let mut rng = ChaCha20Rng::seed_from_u64(0x7ab1e);
                let size: usize = if K::BITS <= 8 { 100 } else { 3000 };
                let make = |seed: u64| $Table::<K, H>::with_seed(1, seed).unwrap();

                $crate::test_round_trip::<_, K, H, _>(&mut rng, make(1), size);
                $crate::test_duplicates::<_, K, H, _>(&mut rng, make(2), size);
                $crate::test_pop::<_, K, H, _>(&mut rng, make(3), size);
                $crate::test_growth::<_, K, H, _>(&mut rng, make(4), size);
                $crate::test_against_model::<_, K, H, _>(&mut rng, make(5), size / 4, size * 4);
            }
        });
    };
}

/// Generates tests for a table type for string keys.
#[macro_export]
macro_rules! generate_table_str_tests {
    ($Table:ident, $Hasher:ident) => {
        #[test]
        fn test_table_routines_string() {
            use rand::SeedableRng;
            use rand_chacha::ChaCha20Rng;

            type K = String;
            type H = $Hasher<String>;

            let mut rng = ChaCha20Rng::seed_from_u64(0x5791);
            let make = |seed: u64| $Table::<K, H>::with_seed(10, seed).unwrap();

            $crate::test_round_trip::<_, K, H, _>(&mut rng, make(1), 3000);
            $crate::test_duplicates::<_, K, H, _>(&mut rng, make(2), 3000);
            $crate::test_pop::<_, K, H, _>(&mut rng, make(3), 3000);
            $crate::test_growth::<_, K, H, _>(&mut rng, make(4), 3000);
            $crate::test_against_model::<_, K, H, _>(&mut rng, make(5), 500, 10000);
        }
    };
}

/// Generates tests for a table type for every integer key type.
#[macro_export]
macro_rules! generate_table_tests {
    ($Table:ident, $Hasher:ident) => {
        $crate::generate_table_int_tests!($Table, $Hasher, u8);
        $crate::generate_table_int_tests!($Table, $Hasher, i8);
        $crate::generate_table_int_tests!($Table, $Hasher, u16);
        $crate::generate_table_int_tests!($Table, $Hasher, i16);
        $crate::generate_table_int_tests!($Table, $Hasher, u32);
        $crate::generate_table_int_tests!($Table, $Hasher, i32);
        $crate::generate_table_int_tests!($Table, $Hasher, u64);
        $crate::generate_table_int_tests!($Table, $Hasher, i64);
        $crate::generate_table_int_tests!($Table, $Hasher, u128);
        $crate::generate_table_int_tests!($Table, $Hasher, i128);
        $crate::generate_table_int_tests!($Table, $Hasher, usize);
        $crate::generate_table_int_tests!($Table, $Hasher, isize);
    };
}
