//! Implements [`HashMap`] for [`ChainMap`].
use crate::chain::ChainMap;
use chainmap_core::{HashMap, HashStrategy};
use std::mem::replace;

impl<K: Eq, V, S: HashStrategy<K>> HashMap<K, V, S> for ChainMap<K, V, S> {
    fn get(&self, key: &K) -> Option<&V> {
        let bucket_idx = self.strategy.bucket(key, self.buckets.len());
        self.buckets[bucket_idx]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        let bucket_idx = self.strategy.bucket(&key, self.buckets.len());
        let chain = &mut self.buckets[bucket_idx];

        for (k, v) in chain.iter_mut() {
            if *k == key {
                return Some(replace(v, value));
            }
        }

        chain.push((key, value));
        self.len += 1;
        None
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        let bucket_idx = self.strategy.bucket(key, self.buckets.len());
        let chain = &mut self.buckets[bucket_idx];

        let entry_idx = chain.iter().position(|(k, _)| k == key)?;
        // Vec::remove shifts the tail, keeping the relative order of the remaining entries.
        let (_, value) = chain.remove(entry_idx);
        self.len -= 1;
        Some(value)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    fn num_collisions(&self) -> usize {
        self.buckets
            .iter()
            .map(|chain| chain.len().saturating_sub(1))
            .sum()
    }
}
