//! Polynomial string hashing computed with Horner's rule, based on the classic
//! Rabin-Karp rolling hash [(Karp & Rabin, 1987)].
//!
//! [(Karp & Rabin, 1987)]: https://doi.org/10.1147/rd.312.0249

use chainmap_core::HashStrategy;

/// The base of the polynomial, a small prime exceeding the 26-letter alphabet size.
pub const BASE: i64 = 31;

/// The modulus of the polynomial, a large prime keeping the accumulator well inside `i64`.
pub const MODULUS: i64 = 1_000_000_009;

/// Hashes a byte string into a bucket index using polynomial hashing.
///
/// Computes `sum((byte_i - b'a' + 1) * BASE^i) mod MODULUS` with the running hash
/// explicitly zero-initialized and the power of the base accumulated incrementally.
/// Bytes below `b'a'` yield negative coefficients; the accumulator is reduced with
/// Euclidean modulo so the result stays in `[0, MODULUS)` regardless.
///
/// An empty key hashes to bucket `0`.
#[inline]
pub fn polynomial(key: &[u8], num_buckets: usize) -> usize {
    debug_assert!(num_buckets > 0, r#""num_buckets" must be > 0"#);

    let mut hash: i64 = 0;
    let mut base_pow: i64 = 1;

    for &byte in key {
        let coefficient = byte as i64 - b'a' as i64 + 1;
        hash = (hash + coefficient * base_pow).rem_euclid(MODULUS);
        base_pow = (base_pow * BASE) % MODULUS;
    }

    (hash as u64 % num_buckets as u64) as usize
}

/// Polynomial (Horner) hash strategy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Polynomial;

impl<K: AsRef<[u8]> + ?Sized> HashStrategy<K> for Polynomial {
    #[inline]
    fn bucket(&self, key: &K, num_buckets: usize) -> usize {
        polynomial(key.as_ref(), num_buckets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainmap_testing::generate_strategy_tests;

    generate_strategy_tests!(polynomial, Polynomial);

    #[test]
    fn test_polynomial_known_buckets() {
        assert_eq!(polynomial(b"abc", 101), 17);
        assert_eq!(polynomial(b"key0", 101), 61);
        assert_eq!(polynomial(b"hello world", 101), 67);
        assert_eq!(polynomial(b"abc", 7), 6);
    }

    #[test]
    fn test_polynomial_empty_key() {
        assert_eq!(polynomial(b"", 101), 0);
        assert_eq!(polynomial(b"", 1), 0);
    }

    #[test]
    fn test_polynomial_non_ascii_key() {
        // Multi-byte UTF-8 content exercises coefficients well above the base alphabet.
        assert_eq!(polynomial("Аня".as_bytes(), 101), 11);
    }

    #[test]
    fn test_polynomial_long_key() {
        let key = vec![b'a'; 300];
        assert_eq!(polynomial(&key, 101), 62);
    }
}
