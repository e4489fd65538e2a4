//! Key-set generation for comparing hash strategies across input distributions.
//!
//! Randomness always comes from a caller-supplied [`Rng`], so a seeded generator
//! reproduces the same key sets run after run.
use rand::Rng;

/// The fixed list of real-world name tokens used as the semantically clustered distribution.
pub const NAME_TOKENS: [&str; 10] = [
    "Аня", "Маша", "Наташа", "Сергей", "Андрей", "Тимофей", "Марианна", "Мария", "Анна", "Юлия",
];

/// A distribution of string keys fed into the collision survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    /// Uniformly random fixed-length strings over the 26-letter lowercase alphabet.
    Random { count: usize, length: usize },
    /// The small fixed list of real-world name tokens.
    Names,
    /// Sequentially numbered synthetic keys: `"key0"`, `"key1"`, ...
    Sequential { count: usize },
}

impl Distribution {
    /// A short human-readable label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Distribution::Random { .. } => "random",
            Distribution::Names => "names",
            Distribution::Sequential { .. } => "sequential",
        }
    }

    /// Generates the key set of the distribution.
    ///
    /// Duplicates are possible in the random distribution and are intentionally kept:
    /// the table under survey deduplicates them itself.
    pub fn keys<R: Rng>(&self, rng: &mut R) -> Vec<String> {
        match *self {
            Distribution::Random { count, length } => {
                (0..count).map(|_| random_key(rng, length)).collect()
            }
            Distribution::Names => NAME_TOKENS.iter().map(|name| name.to_string()).collect(),
            Distribution::Sequential { count } => sequential_keys(count),
        }
    }
}

/// Generates a single random key of the given `length` over the lowercase alphabet.
pub fn random_key<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| rng.random_range(b'a'..=b'z') as char)
        .collect()
}

/// Generates `count` sequentially numbered keys.
pub fn sequential_keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("key{}", i)).collect()
}
