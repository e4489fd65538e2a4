//! Empirical statistics for judging how uniformly a strategy spreads keys over buckets.
//!
//! Raw collision counts collapse a whole occupancy profile into one number; the
//! chi-square statistic keeps the shape, which makes strategies comparable even when
//! their collision counts tie.
use chainmap_core::HashStrategy;
use ndarray::prelude::*;
use num_traits::{Float, NumAssignOps, ToPrimitive};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// A result of a Chi-square test.
#[derive(Debug)]
pub struct Chi2Statistic<V> {
    pub chi2: V,
    pub dof: usize,
    pub p_value: V,
}

/// Counts how many keys every bucket receives under `strategy`.
///
/// Works straight off the strategy, without building a table, so repeated keys are
/// counted repeatedly.
pub fn occupancy_histogram<K, S>(strategy: &S, keys: &[K], num_buckets: usize) -> Array1<f64>
where
    S: HashStrategy<K>,
{
    debug_assert!(num_buckets > 0, r#""num_buckets" must be > 0"#);

    let mut histogram = Array1::<f64>::zeros(num_buckets);
    for key in keys {
        histogram[strategy.bucket(key, num_buckets)] += 1.0;
    }
    histogram
}

/// Calculates the chi-square statistic.
pub fn chi2<V>(observed: &[V], expected: &[V], dof: Option<usize>) -> Chi2Statistic<V>
where
    V: Float + NumAssignOps + From<f64>,
{
    debug_assert_eq!(observed.len(), expected.len(), "Dimensions must match");

    let chi2: V = observed
        .iter()
        .zip(expected)
        .fold(0.0.into(), |acc: V, (&obs, &exp)| {
            let diff = obs - exp;
            acc + diff * diff / exp
        });

    let dof = dof.unwrap_or(observed.len() - 1);
    let dist = ChiSquared::new(dof as f64).unwrap();
    let p_value = (1.0 - dist.cdf(chi2.to_f64().unwrap())).into();

    Chi2Statistic { chi2, dof, p_value }
}

/// Performs a Chi-square uniformity test over an occupancy histogram.
pub fn chi2_uniformity<V>(observed: &Array1<V>) -> Chi2Statistic<V>
where
    V: Float + NumAssignOps + From<f64>,
{
    let total_sum = observed.sum();
    let num_cells = observed.len();
    let expected_value = total_sum / (num_cells as f64).into();

    let expected = Array1::<V>::from_elem(observed.dim(), expected_value);

    chi2(
        observed.as_slice().unwrap(),
        expected.as_slice().unwrap(),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct LastByte;

    impl HashStrategy<String> for LastByte {
        fn bucket(&self, key: &String, num_buckets: usize) -> usize {
            key.bytes().last().unwrap_or(0) as usize % num_buckets
        }
    }

    #[test]
    fn test_occupancy_histogram_counts_every_key() {
        let keys: Vec<String> = ["aa", "ab", "ab"].iter().map(|s| s.to_string()).collect();
        let histogram = occupancy_histogram(&LastByte, &keys, 2);

        // 'a' is odd (0x61), 'b' is even.
        assert_eq!(histogram[1], 1.0);
        assert_eq!(histogram[0], 2.0);
        assert_eq!(histogram.sum(), 3.0);
    }

    #[test]
    fn test_chi2_uniform_histogram_is_zero() {
        let observed = Array1::<f64>::from_elem(101, 9.0);
        let statistic = chi2_uniformity(&observed);

        assert_eq!(statistic.chi2, 0.0);
        assert_eq!(statistic.dof, 100);
        assert!(statistic.p_value > 0.999);
    }

    #[test]
    fn test_chi2_detects_concentration() {
        let mut observed = Array1::<f64>::from_elem(10, 1.0);
        observed[0] = 91.0;
        let statistic = chi2_uniformity(&observed);

        assert!(statistic.chi2 > 100.0);
        assert!(statistic.p_value < 0.001);
    }
}
