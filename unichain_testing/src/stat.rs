//! Implements empirical tests for hash functions and bucket distributions.
use ndarray::prelude::*;
use ndarray::{ScalarOperand, Zip};
use num_traits::{Float, NumAssignOps};
use statrs::distribution::{ChiSquared, ContinuousCDF};
use std::fmt::Debug;

/// A result of a Chi-square test.
#[derive(Debug)]
pub struct Chi2Statistic<V> {
    pub chi2: V,
    pub dof: usize,
    pub p_value: V,
}

/// Calculates the chi-square statistic.
pub fn chi2<V>(observed: &[V], expected: &[V], dof: Option<usize>) -> Chi2Statistic<V>
where
    V: Float + NumAssignOps + From<f64>,
{
    debug_assert_eq!(observed.len(), expected.len(), "Dimensions must match");
    let chi2: V = Zip::from(observed)
        .and(expected)
        .fold(0.0.into(), |acc, &obs, &exp| {
            let diff = obs - exp;
            acc + diff.powf(2.0.into()) / exp
        });

    let dof = dof.unwrap_or(observed.len() - 1);
    let dist = ChiSquared::new(dof as f64).unwrap();
    let p_value = (1.0 - dist.cdf(chi2.to_f64().unwrap())).into();

    Chi2Statistic { chi2, dof, p_value }
}

/// Performs a Chi-square uniformity test.
pub fn chi2_uniformity<'a, V, A>(observed: A) -> Chi2Statistic<V>
where
    V: Float + NumAssignOps + From<f64> + ScalarOperand,
    A: AsArray<'a, V>,
{
    let observed: ArrayView1<V> = observed.into();
    let total_sum = observed.sum();
    let num_cells = observed.len();
    let expected_value = total_sum / (num_cells as f64).into();

    let expected = Array1::<V>::from_elem(observed.dim(), expected_value);
    let observed = observed.to_owned();

    chi2(
        observed.as_slice().unwrap(),
        expected.as_slice().unwrap(),
        None,
    )
}

/// Counts how many of the given hash values fall into each of `num_buckets` buckets.
pub fn bucket_histogram<I>(hashes: I, num_buckets: usize) -> Array1<f64>
where
    I: IntoIterator<Item = usize>,
{
    debug_assert!(num_buckets > 0, "Must have at least 1 bucket");

    let mut histogram = Array1::<f64>::zeros(num_buckets);
    for hash in hashes {
        debug_assert!(
            hash < num_buckets,
            "Hash {} exceeds \"num_buckets\" {}",
            hash,
            num_buckets
        );
        histogram[hash] += 1.0;
    }
    histogram
}

/// Estimates the probability that two distinct keys collide under a randomly drawn member of a
/// hash function family.
///
/// # Parameters
///
/// - `family`: Produces a fresh hash function for every trial.
/// - `x`, `y`: The pair of keys to test.
/// - `num_trials`: Number of hash functions to draw.
pub fn collision_rate<K, F, H>(family: &mut F, x: &K, y: &K, num_trials: usize) -> f64
where
    K: PartialEq + Debug,
    F: FnMut() -> H,
    H: Fn(&K) -> usize,
{
    debug_assert!(x != y, "Keys must be distinct: {:?}", x);
    debug_assert!(num_trials > 0, "Must run at least 1 trial");

    let collisions = (0..num_trials)
        .filter(|_| {
            let hash_function = family();
            hash_function(x) == hash_function(y)
        })
        .count();

    collisions as f64 / num_trials as f64
}

/// Asserts that the given hash values are uniformly distributed over `num_buckets` buckets.
///
/// # Panics
///
/// - If the chi-square uniformity test yields a p-value below `alpha`.
pub fn assert_uniform<I>(hashes: I, num_buckets: usize, alpha: f64)
where
    I: IntoIterator<Item = usize>,
{
    let histogram = bucket_histogram(hashes, num_buckets);
    let statistic = chi2_uniformity(&histogram);
    assert!(
        statistic.p_value > alpha,
        "Uniformity test has failed:\n{:?}\nHistogram: {:?}",
        statistic,
        histogram,
    );
}
