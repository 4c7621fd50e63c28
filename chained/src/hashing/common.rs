/// Extract the top `num_bits` bits from a 64-bit value.
#[inline]
pub const fn extract_bits_64<const SOURCE_BITS: u32>(value: u64, num_bits: u32) -> u32 {
    debug_assert!(num_bits <= 32, r#""num_bits" must be <= 32"#);

    (value >> (SOURCE_BITS - num_bits)) as u32
}

/// Reduce a 64-bit hash to an index in `[0, num_buckets)`.
///
/// Unlike bit extraction this works for any positive number of buckets, not only for powers of
/// two, which is what a table that starts with 10 buckets needs.
#[inline]
pub const fn bucket_index(hash: u64, num_buckets: usize) -> usize {
    debug_assert!(num_buckets > 0, r#""num_buckets" must be greater than 0"#);

    (hash % num_buckets as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bits_64() {
        assert_eq!(extract_bits_64::<{ u64::BITS }>(u64::MAX, 32), u32::MAX);
        assert_eq!(extract_bits_64::<{ u64::BITS }>(1 << 63, 1), 1);
        assert_eq!(extract_bits_64::<{ u64::BITS }>((1 << 63) - 1, 1), 0);
    }

    #[test]
    fn test_bucket_index_in_range() {
        for num_buckets in [1_usize, 2, 7, 10, 20, 40, 1 << 20] {
            for hash in [0_u64, 1, 9, 10, 11, u64::MAX, u64::MAX / 3] {
                let index = bucket_index(hash, num_buckets);
                assert!(index < num_buckets, "{hash} % {num_buckets} = {index}");
                assert_eq!(index as u64, hash % num_buckets as u64);
            }
        }
    }
}
