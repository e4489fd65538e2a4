/// Generates standard test cases for hash strategies.
///
/// This macro generates test functions that verify:
/// - Determinism: repeated hashing of the same key yields the same bucket
/// - Range: the bucket index stays inside `[0, num_buckets)` for a spread of bucket counts
///
/// # Parameters
///
/// - `name`: Snake-case name used in the generated test function names
/// - `strategy_type`: The strategy type to test (e.g., `Polynomial`)
///
/// # Example
///
/// ```ignore
/// generate_strategy_tests!(polynomial, Polynomial);
/// ```
#[macro_export]
macro_rules! generate_strategy_tests {
    ($name:ident, $strategy_type:ty$(,)?) => {
        compose_idents::compose_idents!(
            determinism_fn = concat(test_, $name, _determinism),
            range_fn = concat(test_, $name, _range),
            {
                #[test]
                fn determinism_fn() {
                    use chainmap_core::HashStrategy;
                    use rand::SeedableRng;
                    use rand_chacha::ChaCha20Rng;

                    let mut rng = ChaCha20Rng::from_os_rng();
                    let strategy = <$strategy_type>::default();

                    for _ in 0..200 {
                        let key = $crate::random_key(&mut rng, 12);
                        let first = strategy.bucket(key.as_str(), 101);
                        for _ in 0..5 {
                            assert_eq!(
                                strategy.bucket(key.as_str(), 101),
                                first,
                                "Key: {:?}",
                                key
                            );
                        }
                    }
                }

                #[test]
                fn range_fn() {
                    use chainmap_core::HashStrategy;
                    use rand::SeedableRng;
                    use rand_chacha::ChaCha20Rng;

                    let mut rng = ChaCha20Rng::from_os_rng();
                    let strategy = <$strategy_type>::default();

                    for num_buckets in [1_usize, 2, 7, 101, 1024] {
                        for length in [0_usize, 1, 5, 64] {
                            for _ in 0..50 {
                                let key = $crate::random_key(&mut rng, length);
                                let bucket = strategy.bucket(key.as_str(), num_buckets);
                                assert!(
                                    bucket < num_buckets,
                                    "Bucket {} out of range for {} buckets, key: {:?}",
                                    bucket,
                                    num_buckets,
                                    key
                                );
                            }
                        }
                    }
                }
            }
        );
    };
}
pub use generate_strategy_tests;
