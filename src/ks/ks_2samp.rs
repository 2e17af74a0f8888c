use tracing::debug;

use crate::ks::kolmogorov::{kolmogorov_sf, smirnov_cdf_exact};
use crate::ks::types::{KsMethod, KsResult};
use crate::sample::types::Sample;

/// Exact p-values are used while n_a * n_b stays below this
pub const EXACT_MAX_PRODUCT: usize = 10_000;

/// sup |F_a(x) - F_b(x)| over two ascending slices
pub fn ks_statistic(sorted_a: &[f64], sorted_b: &[f64]) -> f64 {
    let (n, m) = (sorted_a.len(), sorted_b.len());
    let (nf, mf) = (n as f64, m as f64);
    let (mut i, mut j) = (0, 0);
    let mut d: f64 = 0.0;
    while i < n && j < m {
        let x = sorted_a[i].min(sorted_b[j]);
        while i < n && sorted_a[i] <= x {
            i += 1;
        }
        while j < m && sorted_b[j] <= x {
            j += 1;
        }
        d = d.max((i as f64 / nf - j as f64 / mf).abs());
    }
    d
}

/// Two-sided two-sample Kolmogorov-Smirnov test on the full samples
pub fn ks_two_sample(a: &Sample, b: &Sample) -> KsResult {
    let (n, m) = (a.len(), b.len());
    let statistic = ks_statistic(&a.sorted(), &b.sorted());

    let (p_value, method) = if n.saturating_mul(m) < EXACT_MAX_PRODUCT {
        (1.0 - smirnov_cdf_exact(statistic, n, m), KsMethod::Exact)
    } else {
        let en = (n as f64 * m as f64 / (n + m) as f64).sqrt();
        (kolmogorov_sf(en * statistic), KsMethod::Asymptotic)
    };
    let p_value = p_value.clamp(0.0, 1.0);
    debug!(statistic, p_value, ?method, "kolmogorov-smirnov");
    KsResult {
        statistic,
        p_value,
        method,
    }
}
