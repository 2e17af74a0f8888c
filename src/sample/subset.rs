use rand::Rng;
use rand::seq::index;

use crate::sample::types::Sample;

/// Picks `subset_size` distinct positions out of `0..len` without
/// replacement. When the sample is no larger than the subset every
/// position is returned, in order.
pub fn subset_indices<R: Rng + ?Sized>(len: usize, subset_size: usize, rng: &mut R) -> Vec<usize> {
    if len <= subset_size {
        return (0..len).collect();
    }
    index::sample(rng, len, subset_size).into_vec()
}

pub fn random_subset<R: Rng + ?Sized>(sample: &Sample, subset_size: usize, rng: &mut R) -> Vec<f64> {
    let values = sample.values();
    subset_indices(values.len(), subset_size, rng)
        .into_iter()
        .map(|i| values[i])
        .collect()
}
