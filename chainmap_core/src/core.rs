//! Core trait declarations for the whole project.

/// Hash strategy mapping a key to a bucket index.
///
/// Differs from [`core::hash::Hasher`] in the way that it maps a key straight to a bucket index
/// for a given bucket count, rather than producing an intermediate 64-bit digest.
///
/// This keeps the strategies directly comparable: two strategies bound to the same bucket count
/// disagree only in how they distribute keys, not in how the digest is folded into a bucket.
///
/// # Guarantees
///
/// - Pure and deterministic: the result depends only on `key` and `num_buckets` -
///   no hidden state, no dependence on call count or insertion order.
/// - The returned index lies in `[0, num_buckets)` for any `num_buckets > 0`.
/// - Total over the key domain: empty keys and keys with arbitrary byte content
///   must produce a defined index.
pub trait HashStrategy<K: ?Sized>: Default {
    /// Map `key` to a bucket index in `[0, num_buckets)`.
    ///
    /// `num_buckets` must be greater than zero.
    fn bucket(&self, key: &K, num_buckets: usize) -> usize;
}

/// A mutable hash map bound to a [`HashStrategy`].
pub trait HashMap<K: Eq, V, S: HashStrategy<K>> {
    /// Get the value associated with the given `key`.
    fn get(&self, key: &K) -> Option<&V>;

    /// Insert a key-value pair.
    ///
    /// If the key is already present, its value is overwritten in place and the previous
    /// value is returned; the element count does not change. Otherwise the pair is appended
    /// to its chain and `None` is returned.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Remove the entry for the given `key`, returning its value.
    ///
    /// Absence is an expected outcome signalled by `None`, never an error.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Get the number of elements in the map.
    fn len(&self) -> usize;

    /// Check if the map is empty.
    fn is_empty(&self) -> bool;

    /// Get the load factor of the map.
    fn load_factor(&self) -> f64;

    /// Get the number of collisions in the map.
    ///
    /// Every bucket holding more than one entry contributes its entry count minus one.
    /// The value is recomputed from live bucket state on each call.
    fn num_collisions(&self) -> usize;
}
