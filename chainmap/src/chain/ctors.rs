//! Implements constructors for [`ChainMap`].
use crate::chain::ChainMap;
use chainmap_core::{ChainMapError, HashStrategy};

impl<K: Eq, V, S: HashStrategy<K>> ChainMap<K, V, S> {
    /// Creates an empty table with `num_buckets` buckets and the strategy's default instance.
    ///
    /// # Errors
    ///
    /// - [`ChainMapError::InvalidCapacity`] if `num_buckets` is zero.
    pub fn new(num_buckets: usize) -> Result<Self, ChainMapError> {
        Self::with_strategy(num_buckets, S::default())
    }

    /// Creates an empty table with `num_buckets` buckets bound to the given `strategy`.
    ///
    /// # Errors
    ///
    /// - [`ChainMapError::InvalidCapacity`] if `num_buckets` is zero.
    pub fn with_strategy(num_buckets: usize, strategy: S) -> Result<Self, ChainMapError> {
        if num_buckets == 0 {
            return Err(ChainMapError::InvalidCapacity);
        }

        let mut buckets = Vec::with_capacity(num_buckets);
        buckets.resize_with(num_buckets, Vec::new);

        Ok(Self {
            strategy,
            buckets: buckets.into_boxed_slice(),
            len: 0,
        })
    }

    /// Get the number of buckets, fixed at construction.
    #[inline]
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }
}
