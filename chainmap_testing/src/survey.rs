//! Helpers for filling maps and collecting per-configuration collision statistics.
use chainmap_core::{HashMap, HashStrategy};

/// One row of a collision survey: a single strategy applied to a single key distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyEntry {
    pub strategy: &'static str,
    pub distribution: &'static str,
    pub len: usize,
    pub num_collisions: usize,
}

/// Builds a map with `factory`, inserts every key with a constant placeholder value and
/// returns the resulting element and collision counts.
///
/// Repeated keys overwrite in place, so `len` reflects distinct keys only.
pub fn fill<K, S, M, F>(factory: F, keys: Vec<K>) -> (usize, usize)
where
    K: Eq,
    S: HashStrategy<K>,
    M: HashMap<K, u32, S>,
    F: FnOnce() -> M,
{
    let mut map = factory();
    for key in keys {
        map.insert(key, 1);
    }
    (map.len(), map.num_collisions())
}
