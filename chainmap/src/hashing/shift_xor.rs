//! Shift-XOR string hashing, a rotate-and-mix scheme in the spirit of
//! [(Ramakrishna & Zobel, 1997)].
//!
//! [(Ramakrishna & Zobel, 1997)]: https://doi.org/10.1142/9789812819536_0023

use chainmap_core::HashStrategy;

/// Hashes a byte string into a bucket index using the shift-XOR scheme.
///
/// Per byte the 32-bit signed accumulator is updated as
/// `(hash << 5) ^ (hash >> 27) ^ byte` under two's-complement semantics: the left shift
/// discards high bits and the right shift is arithmetic. The accumulator may end up
/// negative, so the bucket index is taken with Euclidean modulo, which keeps it
/// non-negative for any `num_buckets > 0`.
///
/// An empty key hashes to bucket `0`.
#[inline]
pub fn shift_xor(key: &[u8], num_buckets: usize) -> usize {
    debug_assert!(num_buckets > 0, r#""num_buckets" must be > 0"#);

    let mut hash: i32 = 0;

    for &byte in key {
        hash = (hash << 5) ^ (hash >> 27) ^ byte as i32;
    }

    (hash as i64).rem_euclid(num_buckets as i64) as usize
}

/// Shift-XOR hash strategy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShiftXor;

impl<K: AsRef<[u8]> + ?Sized> HashStrategy<K> for ShiftXor {
    #[inline]
    fn bucket(&self, key: &K, num_buckets: usize) -> usize {
        shift_xor(key.as_ref(), num_buckets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainmap_testing::generate_strategy_tests;

    generate_strategy_tests!(shift_xor, ShiftXor);

    #[test]
    fn test_shift_xor_known_buckets() {
        assert_eq!(shift_xor(b"abc", 101), 94);
        assert_eq!(shift_xor(b"key0", 101), 91);
        assert_eq!(shift_xor(b"hello world", 101), 98);
        assert_eq!(shift_xor(b"abc", 7), 0);
    }

    #[test]
    fn test_shift_xor_empty_key() {
        assert_eq!(shift_xor(b"", 101), 0);
        assert_eq!(shift_xor(b"", 1), 0);
    }

    #[test]
    fn test_shift_xor_negative_accumulator() {
        // High bytes drive the accumulator negative; Euclidean modulo still yields
        // an index inside the table.
        assert_eq!(shift_xor("Аня".as_bytes(), 101), 2);
        assert_eq!(shift_xor(b"\xFF\xFF\xFF\xFF", 101), 28);
    }

    #[test]
    fn test_shift_xor_long_key() {
        assert_eq!(shift_xor(b"zzzzzzzzzz", 101), 21);
        let key = vec![b'a'; 300];
        assert_eq!(shift_xor(&key, 101), 17);
    }
}
