use std::f64::consts::{FRAC_1_SQRT_2, PI};

use rand::Rng;
use tracing::{debug, warn};

use crate::error::DistCompareErr;
use crate::normality::error::NormalityErr;
use crate::normality::std_normal::StdNormal;
use crate::normality::types::NormalityVerdict;
use crate::sample::{subset::random_subset, types::Sample};

/// Largest n the Royston approximation is calibrated for
pub const MAX_CALIBRATED_N: usize = 5000;

const SMALL: f64 = 1e-19;

// Royston (1995) polynomial coefficients
const C1: [f64; 6] = [0.0, 0.221157, -0.147981, -2.07119, 4.434685, -2.706056];
const C2: [f64; 6] = [0.0, 0.042981, -0.293762, -1.752461, 5.682633, -3.582633];
const C3: [f64; 4] = [0.544, -0.39978, 0.025054, -6.714e-4];
const C4: [f64; 4] = [1.3822, -0.77857, 0.062767, -0.0020322];
const C5: [f64; 4] = [-1.5861, -0.31082, -0.083751, 0.0038915];
const C6: [f64; 3] = [-0.4803, -0.082676, 0.0030302];
const G: [f64; 2] = [-2.273, 0.459];

/// c[0] + c[1] x + c[2] x^2 + ...
fn poly(c: &[f64], x: f64) -> f64 {
    c.iter().rev().fold(0.0, |acc, &ci| acc * x + ci)
}

/// Shapiro-Wilk W and its p-value, using Royston's approximation of the
/// coefficients and of the null distribution of W
pub fn shapiro_wilk(x: &[f64]) -> Result<(f64, f64), DistCompareErr> {
    let n = x.len();
    if n < 3 {
        return Err(NormalityErr::TooFewObservations(n).into());
    }
    let mut sorted = x.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    if sorted[n - 1] - sorted[0] < SMALL {
        return Err(NormalityErr::ZeroRange.into());
    }

    let mean = sorted.iter().sum::<f64>() / n as f64;
    let ssq: f64 = sorted.iter().map(|v| (v - mean) * (v - mean)).sum();

    //----------------------------------------
    // n = 3 has an exact null distribution
    let std_normal = StdNormal::new()?;
    if n == 3 {
        let numerator = FRAC_1_SQRT_2 * (sorted[2] - sorted[0]);
        let w = (numerator * numerator / ssq).clamp(0.75, 1.0);
        let p = (6.0 / PI * (w.sqrt().asin() - PI / 3.0)).clamp(0.0, 1.0);
        return Ok((w, p));
    }

    let a = coefficients(n, &std_normal)?;
    let numerator: f64 = a
        .iter()
        .enumerate()
        .map(|(i, ai)| ai * (sorted[n - 1 - i] - sorted[i]))
        .sum();
    let w = (numerator * numerator / ssq).min(1.0);
    Ok((w, p_value(w, n, &std_normal)))
}

/// Antisymmetric weights a_1..a_{n/2} (the upper half; the lower half is
/// their negation)
fn coefficients(n: usize, std_normal: &StdNormal) -> Result<Vec<f64>, DistCompareErr> {
    let nn2 = n / 2;
    let an25 = n as f64 + 0.25;
    let m = (1..=nn2)
        .map(|i| std_normal.quantile((i as f64 - 0.375) / an25))
        .collect::<Result<Vec<f64>, DistCompareErr>>()?;
    let summ2 = 2.0 * m.iter().map(|mi| mi * mi).sum::<f64>();
    let ssumm2 = summ2.sqrt();
    let rsn = 1.0 / (n as f64).sqrt();
    let a1 = poly(&C1, rsn) - m[0] / ssumm2;

    let mut a = vec![0.0; nn2];
    let (first_plain, fac_sq, denom) = if n > 5 {
        let a2 = -m[1] / ssumm2 + poly(&C2, rsn);
        a[1] = a2;
        (
            2,
            summ2 - 2.0 * m[0] * m[0] - 2.0 * m[1] * m[1],
            1.0 - 2.0 * a1 * a1 - 2.0 * a2 * a2,
        )
    } else {
        (1, summ2 - 2.0 * m[0] * m[0], 1.0 - 2.0 * a1 * a1)
    };
    if fac_sq <= 0.0 || denom <= 0.0 {
        return Err(NormalityErr::Coefficients(n).into());
    }
    let fac = (fac_sq / denom).sqrt();
    a[0] = a1;
    for i in first_plain..nn2 {
        a[i] = -m[i] / fac;
    }
    Ok(a)
}

fn p_value(w: f64, n: usize, std_normal: &StdNormal) -> f64 {
    let one_minus_w = 1.0 - w;
    if one_minus_w <= 0.0 {
        return 1.0;
    }
    let an = n as f64;
    let mut y = one_minus_w.ln();

    let (m, s) = if n <= 11 {
        let gamma = poly(&G, an);
        if y >= gamma {
            return 0.0;
        }
        y = -(gamma - y).ln();
        (poly(&C3, an), poly(&C4, an).exp())
    } else {
        let ln_n = an.ln();
        (poly(&C5, ln_n), poly(&C6, ln_n).exp())
    };
    std_normal.sf((y - m) / s).clamp(0.0, 1.0)
}

/// A larger p-value is needed to keep the verdict as alpha grows
pub fn shapiro_is_normal(p_value: f64, alpha: f64) -> bool {
    p_value > alpha
}

/// Shapiro-Wilk on at most `subset_size` randomly chosen observations.
/// W is over-powered on very large samples, so only a subset is tested.
pub fn subset_shapiro<R: Rng + ?Sized>(
    sample: &Sample,
    subset_size: usize,
    alpha: f64,
    rng: &mut R,
) -> Result<NormalityVerdict, DistCompareErr> {
    let subset = random_subset(sample, subset_size, rng);
    if subset.len() > MAX_CALIBRATED_N {
        warn!(
            sample = sample.label(),
            n = subset.len(),
            "shapiro-wilk p-value may be inaccurate above {MAX_CALIBRATED_N} observations"
        );
    }
    let (w, p) = shapiro_wilk(&subset)?;
    debug!(sample = sample.label(), n = subset.len(), w, p, "shapiro-wilk");
    Ok(NormalityVerdict {
        statistic: w,
        p_value: p,
        is_normal: shapiro_is_normal(p, alpha),
        n_used: subset.len(),
    })
}
