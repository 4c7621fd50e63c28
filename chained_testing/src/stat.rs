//! Statistical checks for the distribution of keys over buckets.
use ndarray::prelude::*;
use ndarray::Zip;
use num_traits::{Float, FromPrimitive};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// A result of a Chi-square test.
#[derive(Debug, Clone, Copy)]
pub struct Chi2Statistic<V> {
    pub chi2: V,
    pub dof: usize,
    pub p_value: V,
}

/// Calculates the chi-square statistic of `observed` frequencies against `expected` ones.
pub fn chi2<V>(
    observed: ArrayView1<V>,
    expected: ArrayView1<V>,
    dof: Option<usize>,
) -> Chi2Statistic<V>
where
    V: Float + FromPrimitive,
{
    debug_assert_eq!(observed.len(), expected.len(), "Dimensions must match");
    debug_assert!(observed.len() > 1, "Need at least 2 categories");

    let chi2 = Zip::from(observed)
        .and(expected)
        .fold(V::zero(), |acc, &obs, &exp| {
            let diff = obs - exp;
            acc + diff * diff / exp
        });

    let dof = dof.unwrap_or(observed.len() - 1);
    let dist = ChiSquared::new(dof as f64).unwrap();
    let p_value = V::from_f64(dist.sf(chi2.to_f64().unwrap())).unwrap();

    Chi2Statistic { chi2, dof, p_value }
}

/// Tests whether `observed` frequencies are uniform over the categories.
pub fn chi2_uniformity<V>(observed: ArrayView1<V>) -> Chi2Statistic<V>
where
    V: Float + FromPrimitive,
{
    let mean = observed.sum() / V::from_usize(observed.len()).unwrap();
    let expected = Array1::from_elem(observed.len(), mean);
    chi2(observed, expected.view(), None)
}

/// Counts how many of `keys` land in each of `num_buckets` buckets.
pub fn bucket_counts<K>(
    keys: &[K],
    num_buckets: usize,
    index: impl Fn(&K) -> usize,
) -> Array1<f64> {
    let mut counts = Array1::<f64>::zeros(num_buckets);
    for key in keys {
        let i = index(key);
        assert!(i < num_buckets, "Index {} is out of range [0, {})", i, num_buckets);
        counts[i] += 1.0;
    }
    counts
}

/// Tests whether `index` spreads `keys` uniformly over `num_buckets` buckets.
pub fn bucket_uniformity<K>(
    keys: &[K],
    num_buckets: usize,
    index: impl Fn(&K) -> usize,
) -> Chi2Statistic<f64> {
    let counts = bucket_counts(keys, num_buckets, index);
    chi2_uniformity(counts.view())
}

/// An aggregation of p-values from multiple runs of a statistical test.
#[derive(Debug)]
pub struct PValueAggregation {
    pub outcome: bool,
    pub alpha: f64,
    pub expected_passes: f64,
    pub num_passes: usize,
}

/// Aggregates p-values from independent runs: the outcome is positive when the number of runs
/// with `p >= alpha` is within three standard deviations of the expected pass rate.
pub fn aggregate_p_values(p_values: &[f64], alpha: f64) -> PValueAggregation {
    let num_trials = p_values.len() as f64;
    let pass_rate = 1.0 - alpha;
    let confidence = 3.0 * ((pass_rate * (1.0 - pass_rate)) / num_trials).sqrt();
    let expected_passes = num_trials * (pass_rate - confidence);
    let num_passes = p_values.iter().filter(|&&p| p >= alpha).count();

    PValueAggregation {
        outcome: num_passes as f64 >= expected_passes,
        alpha,
        expected_passes,
        num_passes,
    }
}
