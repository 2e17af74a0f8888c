use itertools::izip;

use crate::comparison::types::SharedHistogram;
use crate::sample::types::Sample;

/// Bins both samples over [min(A ∪ B), max(A ∪ B)] with `num_bins`
/// equal-width bins. Every bin is half-open except the last, which also
/// holds the maximum.
pub fn shared_histogram(a: &Sample, b: &Sample, num_bins: usize) -> SharedHistogram {
    let lo = a.min().min(b.min());
    let hi = a.max().max(b.max());
    let num_bins = num_bins.max(1);
    let width = (hi - lo) / num_bins as f64;

    let mut edges: Vec<f64> = (0..=num_bins).map(|i| lo + i as f64 * width).collect();
    edges[num_bins] = hi;

    SharedHistogram {
        counts_a: bin_counts(a.values(), lo, hi, num_bins),
        counts_b: bin_counts(b.values(), lo, hi, num_bins),
        edges,
    }
}

fn bin_counts(values: &[f64], lo: f64, hi: f64, num_bins: usize) -> Vec<u64> {
    let mut counts = vec![0_u64; num_bins];
    let span = hi - lo;
    for &x in values {
        let idx = if span > 0.0 {
            (((x - lo) / span * num_bins as f64) as usize).min(num_bins - 1)
        } else {
            0
        };
        counts[idx] += 1;
    }
    counts
}

impl SharedHistogram {
    pub fn num_bins(&self) -> usize {
        self.counts_a.len()
    }

    /// (count_a, count_b) for every bin at least one sample occupies
    pub fn non_empty_columns(&self) -> Vec<(u64, u64)> {
        izip!(&self.counts_a, &self.counts_b)
            .filter(|(ca, cb)| **ca + **cb > 0)
            .map(|(ca, cb)| (*ca, *cb))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_cover_every_observation() {
        let a = Sample::new("A", vec![0.0, 1.0, 2.0, 3.0, 10.0]).unwrap();
        let b = Sample::new("B", vec![4.0, 5.0, 9.99]).unwrap();
        let hist = shared_histogram(&a, &b, 5);
        assert_eq!(hist.counts_a, vec![2, 2, 0, 0, 1]);
        assert_eq!(hist.counts_b, vec![0, 0, 2, 0, 1]);
        assert_eq!(hist.edges, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn empty_bins_dropped() {
        let a = Sample::new("A", vec![0.0, 1.0, 2.0, 3.0, 10.0]).unwrap();
        let b = Sample::new("B", vec![4.0, 5.0, 9.99]).unwrap();
        let hist = shared_histogram(&a, &b, 5);
        assert_eq!(hist.non_empty_columns(), vec![(2, 0), (2, 0), (0, 2), (1, 1)]);
    }

    #[test]
    fn identical_values_share_one_bin() {
        let a = Sample::new("A", vec![1.0, 1.0]).unwrap();
        let b = Sample::new("B", vec![1.0]).unwrap();
        let hist = shared_histogram(&a, &b, 20);
        assert_eq!(hist.non_empty_columns(), vec![(2, 1)]);
    }
}
