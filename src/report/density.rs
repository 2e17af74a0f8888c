//! Curves behind the comparison figure: density-scaled histograms, the
//! empirical CDF, a Gaussian kernel density estimate and boxplot quartiles.

use statrs::distribution::{Continuous, Normal};
use statrs::statistics::{Data, Median, OrderStatistics};

use crate::comparison::histogram::shared_histogram;
use crate::sample::types::Sample;

/// Grid resolution for the binned kernel density estimate
const KDE_BINS: usize = 1024;

/// (left edge, right edge, density) for each bin of A and of B on a shared
/// grid, so both integrate to one
pub fn density_histograms(
    a: &Sample,
    b: &Sample,
    num_bins: usize,
) -> (Vec<(f64, f64, f64)>, Vec<(f64, f64, f64)>) {
    let hist = shared_histogram(a, b, num_bins);
    let scale = |counts: &[u64], n: usize| -> Vec<(f64, f64, f64)> {
        hist.edges
            .windows(2)
            .zip(counts)
            .map(|(edge, &count)| {
                let width = edge[1] - edge[0];
                let density = if width > 0.0 {
                    count as f64 / (n as f64 * width)
                } else {
                    0.0
                };
                (edge[0], edge[1], density)
            })
            .collect()
    };
    (scale(&hist.counts_a, a.len()), scale(&hist.counts_b, b.len()))
}

/// Empirical CDF as (x, F(x)) points, thinned to about `max_points`
pub fn ecdf_points(sorted: &[f64], max_points: usize) -> Vec<(f64, f64)> {
    let n = sorted.len();
    if n == 0 {
        return Vec::new();
    }
    let step = (n / max_points.max(1)).max(1);
    let mut points: Vec<(f64, f64)> = (0..n)
        .step_by(step)
        .map(|i| (sorted[i], (i + 1) as f64 / n as f64))
        .collect();
    if points.last().map(|p| p.1) != Some(1.0) {
        points.push((sorted[n - 1], 1.0));
    }
    points
}

/// Scott's rule, sd * n^(-1/5)
pub fn scott_bandwidth(sample: &Sample) -> f64 {
    sample.std_dev() * (sample.len() as f64).powf(-0.2)
}

/// Gaussian KDE evaluated at `points` evenly spaced x values over
/// [lo, hi]. Observations are first binned onto a fine grid so the cost
/// does not grow with the sample size.
pub fn kde_curve(sample: &Sample, lo: f64, hi: f64, points: usize) -> Vec<(f64, f64)> {
    let h = scott_bandwidth(sample);
    let (s_min, s_max) = (sample.min(), sample.max());
    let span = s_max - s_min;
    if !(h > 0.0) || points < 2 {
        return Vec::new();
    }
    let Ok(kernel) = Normal::new(0.0, h) else {
        return Vec::new();
    };

    let mut counts = vec![0_u64; KDE_BINS];
    for &x in sample.values() {
        let idx = ((x - s_min) / span * (KDE_BINS - 1) as f64).round() as usize;
        counts[idx.min(KDE_BINS - 1)] += 1;
    }
    let centers: Vec<(f64, f64)> = counts
        .iter()
        .enumerate()
        .filter(|(_, c)| **c > 0)
        .map(|(i, &c)| (s_min + span * i as f64 / (KDE_BINS - 1) as f64, c as f64))
        .collect();

    let n = sample.len() as f64;
    (0..points)
        .map(|k| {
            let x = lo + (hi - lo) * k as f64 / (points - 1) as f64;
            let density: f64 = centers
                .iter()
                .map(|(c, w)| w * kernel.pdf(x - c))
                .sum::<f64>()
                / n;
            (x, density)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStats {
    pub whisker_low: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_high: f64,
}

/// Quartiles with whiskers at the most extreme observations within
/// 1.5 IQR of the box
pub fn box_stats(sample: &Sample) -> BoxStats {
    let mut data = Data::new(sample.values().to_vec());
    let q1 = data.lower_quartile();
    let q3 = data.upper_quartile();
    let median = data.median();
    let iqr = q3 - q1;
    let (fence_low, fence_high) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);
    let values = sample.values().iter().copied();
    BoxStats {
        whisker_low: values
            .clone()
            .filter(|&v| v >= fence_low)
            .fold(f64::INFINITY, f64::min),
        q1,
        median,
        q3,
        whisker_high: values
            .filter(|&v| v <= fence_high)
            .fold(f64::NEG_INFINITY, f64::max),
    }
}
