//! Collision-count comparison driver.
//!
//! Builds one capacity-101 table per (strategy, distribution) pair, inserts every key of
//! the distribution with a constant placeholder value and prints the resulting collision
//! counts. The random distribution comes from a fixed-seed PRNG, so the whole report is
//! reproducible run after run.
#![allow(clippy::print_stdout)]

use chainmap::chain::ChainMap;
use chainmap::hashing::{Djb2, Polynomial, ShiftXor};
use chainmap_core::{ChainMapError, HashStrategy};
use chainmap_testing::{fill, Distribution, SurveyEntry};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const NUM_BUCKETS: usize = 101;
const NUM_KEYS: usize = 1000;
const KEY_LENGTH: usize = 5;
const SEED: u64 = 0x6368_6169_6e6d_6170; // "chainmap"

fn survey_strategy<S>(
    strategy: &'static str,
    distribution: &'static str,
    keys: &[String],
) -> Result<SurveyEntry, ChainMapError>
where
    S: HashStrategy<String>,
{
    let map = ChainMap::<String, u32, S>::new(NUM_BUCKETS)?;
    let (len, num_collisions) = fill(move || map, keys.to_vec());

    Ok(SurveyEntry {
        strategy,
        distribution,
        len,
        num_collisions,
    })
}

fn survey<R: Rng>(rng: &mut R) -> Result<Vec<SurveyEntry>, ChainMapError> {
    let distributions = [
        Distribution::Random {
            count: NUM_KEYS,
            length: KEY_LENGTH,
        },
        Distribution::Names,
        Distribution::Sequential { count: NUM_KEYS },
    ];

    let mut entries = Vec::new();
    for distribution in distributions {
        let label = distribution.label();
        let keys = distribution.keys(rng);

        entries.push(survey_strategy::<Polynomial>("polynomial", label, &keys)?);
        entries.push(survey_strategy::<Djb2>("djb2", label, &keys)?);
        entries.push(survey_strategy::<ShiftXor>("shift-xor", label, &keys)?);
    }
    Ok(entries)
}

fn main() -> Result<(), ChainMapError> {
    let mut rng = ChaCha20Rng::seed_from_u64(SEED);

    let mut current_distribution = "";
    for entry in survey(&mut rng)? {
        if entry.distribution != current_distribution {
            current_distribution = entry.distribution;
            println!("{} data:", entry.distribution);
        }
        println!(
            "  {:<10} {:>4} collisions over {:>4} keys",
            entry.strategy, entry.num_collisions, entry.len
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survey_is_reproducible() {
        let first = survey(&mut ChaCha20Rng::seed_from_u64(SEED)).unwrap();
        let second = survey(&mut ChaCha20Rng::seed_from_u64(SEED)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_survey_shape() {
        let entries = survey(&mut ChaCha20Rng::seed_from_u64(SEED)).unwrap();

        assert_eq!(entries.len(), 9);
        for entry in &entries {
            match entry.distribution {
                "names" => assert_eq!(entry.len, 10),
                "sequential" => assert_eq!(entry.len, NUM_KEYS),
                // Random keys may repeat; the table keeps distinct ones only.
                "random" => assert!(entry.len <= NUM_KEYS),
                other => panic!("Unexpected distribution: {}", other),
            }
            assert!(entry.num_collisions < entry.len.max(1));
        }
    }
}
