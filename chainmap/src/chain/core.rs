//! Declares core types for [`ChainMap`].
use chainmap_core::HashStrategy;
use std::fmt::{Debug, Formatter};

/// Hash table resolving collisions by chaining colliding entries within a bucket.
///
/// The bucket count is fixed at construction - the table never resizes. This is deliberate:
/// the table exists to compare raw collision behavior of hash strategies at a fixed size,
/// so the bucket count is a benchmarking parameter rather than an adaptive property.
///
/// # Guarantees
///
/// - At most one entry per distinct key.
/// - Every entry with key `k` resides in the bucket `strategy.bucket(&k, num_buckets)`.
/// - Within a bucket, entries keep their relative insertion order across removals.
///
/// # Examples
///
/// ```rust
/// use chainmap::chain::ChainMap;
/// use chainmap::core::HashMap;
/// use chainmap::hashing::Polynomial;
///
/// let mut book_reviews = ChainMap::<&str, &str, Polynomial>::new(101).unwrap();
///
/// book_reviews.insert("Adventures of Huckleberry Finn", "My favorite book.");
/// book_reviews.insert("Grimms' Fairy Tales", "Masterpiece.");
/// book_reviews.insert("Pride and Prejudice", "Very enjoyable.");
///
/// // Check for a specific one.
/// if book_reviews.get(&"Les Misérables").is_none() {
///     println!("We've got {} reviews, but Les Misérables ain't one.",
///              book_reviews.len());
/// }
/// ```
pub struct ChainMap<K: Eq, V, S: HashStrategy<K>> {
    pub(crate) strategy: S,
    pub(crate) buckets: Box<[Vec<(K, V)>]>,
    pub(crate) len: usize,
}

impl<K, V, S> Debug for ChainMap<K, V, S>
where
    K: Eq + Debug,
    V: Debug,
    S: HashStrategy<K> + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainMap")
            .field("strategy", &self.strategy)
            .field("buckets", &self.buckets)
            .field("len", &self.len)
            .finish()
    }
}
