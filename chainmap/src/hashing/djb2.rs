//! Multiplicative string hashing with the multiplier 33, known as DJB2
//! [(Bernstein, 1991)].
//!
//! [(Bernstein, 1991)]: http://www.cse.yorku.ca/~oz/hash.html

use chainmap_core::HashStrategy;

/// The initial value of the accumulator.
pub const SEED: u64 = 5381;

/// Hashes a byte string into a bucket index using the DJB2 scheme.
///
/// Per byte the accumulator is updated as `hash * 33 + byte`, computed as
/// `(hash << 5) + hash + byte` with unsigned wraparound arithmetic.
///
/// An empty key hashes to bucket `SEED % num_buckets`.
#[inline]
pub fn djb2(key: &[u8], num_buckets: usize) -> usize {
    debug_assert!(num_buckets > 0, r#""num_buckets" must be > 0"#);

    let mut hash: u64 = SEED;

    for &byte in key {
        hash = (hash << 5).wrapping_add(hash).wrapping_add(byte as u64);
    }

    (hash % num_buckets as u64) as usize
}

/// Multiplicative (DJB2) hash strategy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Djb2;

impl<K: AsRef<[u8]> + ?Sized> HashStrategy<K> for Djb2 {
    #[inline]
    fn bucket(&self, key: &K, num_buckets: usize) -> usize {
        djb2(key.as_ref(), num_buckets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainmap_testing::generate_strategy_tests;

    generate_strategy_tests!(djb2, Djb2);

    #[test]
    fn test_djb2_known_buckets() {
        assert_eq!(djb2(b"abc", 101), 61);
        assert_eq!(djb2(b"key0", 101), 6);
        assert_eq!(djb2(b"hello world", 101), 20);
        assert_eq!(djb2(b"abc", 7), 6);
    }

    #[test]
    fn test_djb2_empty_key() {
        assert_eq!(djb2(b"", 101), (SEED % 101) as usize);
        assert_eq!(djb2(b"", 101), 28);
        assert_eq!(djb2(b"", 1), 0);
    }

    #[test]
    fn test_djb2_non_ascii_key() {
        assert_eq!(djb2("Аня".as_bytes(), 101), 38);
    }

    #[test]
    fn test_djb2_long_key() {
        // 300 bytes overflow the accumulator many times over; wraparound keeps it defined.
        let key = vec![b'a'; 300];
        assert_eq!(djb2(&key, 101), 30);
    }
}
