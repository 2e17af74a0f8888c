use tracing::{debug, warn};

use crate::error::DistCompareErr;
use crate::normality::error::NormalityErr;
use crate::normality::std_normal::StdNormal;
use crate::normality::types::{AndersonCriterion, AndersonLevel, AndersonVerdict};
use crate::sample::types::Sample;

/// Asymptotic critical values for the normal case with estimated mean and
/// variance, in `AndersonLevel::ALL` order
const NORMAL_CRITICAL: [f64; 5] = [0.576, 0.656, 0.787, 0.918, 1.092];

/// A^2 statistic of `x` against a normal with the sample's mean and
/// (n - 1) standard deviation, together with the small-sample adjusted
/// critical value table
pub fn anderson_darling_normal(x: &[f64]) -> Result<(f64, [f64; 5]), DistCompareErr> {
    let n = x.len();
    if n < 2 {
        return Err(NormalityErr::TooFewObservations(n).into());
    }
    let mut sorted = x.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let nf = n as f64;
    let mean = sorted.iter().sum::<f64>() / nf;
    let var = sorted.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (nf - 1.0);
    if var <= 0.0 {
        return Err(NormalityErr::ZeroRange.into());
    }
    let sd = var.sqrt();
    let z: Vec<f64> = sorted.iter().map(|v| (v - mean) / sd).collect();
    let std_normal = StdNormal::new()?;

    let s: f64 = (0..n)
        .map(|i| {
            let weight = (2 * i + 1) as f64 / nf;
            weight * (std_normal.ln_cdf(z[i]) + std_normal.ln_sf(z[n - 1 - i]))
        })
        .sum();
    let a2 = -nf - s;

    let adjust = 1.0 + 4.0 / nf - 25.0 / (nf * nf);
    let critical = NORMAL_CRITICAL.map(|c| (c / adjust * 1000.0).round() / 1000.0);
    Ok((a2, critical))
}

impl AndersonCriterion {
    pub fn resolve(&self, alpha: f64) -> AndersonLevel {
        match self {
            AndersonCriterion::Fixed(level) => *level,
            AndersonCriterion::MatchAlpha => {
                let (level, exact) = AndersonLevel::closest_to(alpha);
                if !exact {
                    warn!(
                        alpha,
                        level = level.significance(),
                        "alpha has no anderson-darling row; using nearest tabulated level"
                    );
                }
                level
            }
        }
    }
}

pub fn anderson_verdict(
    sample: &Sample,
    level: AndersonLevel,
) -> Result<AndersonVerdict, DistCompareErr> {
    let (statistic, critical_values) = anderson_darling_normal(sample.values())?;
    let critical_value = critical_values[level.index()];
    debug!(
        sample = sample.label(),
        statistic, critical_value, "anderson-darling"
    );
    Ok(AndersonVerdict {
        statistic,
        critical_values,
        level,
        critical_value,
        is_normal: statistic < critical_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normality::std_normal::StdNormal;

    #[test]
    fn critical_values_adjusted_for_n() {
        let x: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let (_, crit) = anderson_darling_normal(&x).unwrap();
        // 1 + 4/100 - 25/10000 = 1.0375
        assert_eq!(crit, [0.555, 0.632, 0.759, 0.885, 1.053]);
    }

    #[test]
    fn normal_quantiles_pass() {
        let n = 1_000;
        let std_normal = StdNormal::new().unwrap();
        let x: Vec<f64> = (1..=n)
            .map(|i| 50.0 + 10.0 * std_normal.quantile((i as f64 - 0.5) / n as f64).unwrap())
            .collect();
        let (a2, crit) = anderson_darling_normal(&x).unwrap();
        assert!(a2 >= 0.0);
        assert!(a2 < crit[AndersonLevel::FifteenPercent.index()]);
    }

    #[test]
    fn uniform_grid_rejected() {
        let x: Vec<f64> = (0..2_000).map(|i| i as f64).collect();
        let (a2, crit) = anderson_darling_normal(&x).unwrap();
        assert!(a2 > crit[AndersonLevel::OnePercent.index()]);
    }

    #[test]
    fn criterion_resolution() {
        assert_eq!(
            AndersonCriterion::MatchAlpha.resolve(0.05),
            AndersonLevel::FivePercent
        );
        assert_eq!(
            AndersonCriterion::Fixed(AndersonLevel::OnePercent).resolve(0.05),
            AndersonLevel::OnePercent
        );
    }

    #[test]
    fn looser_level_never_accepts_more() {
        let x: Vec<f64> = (1..=40).map(|i| (i as f64).powf(1.5)).collect();
        let sample = Sample::new("A", x).unwrap();
        let strict = anderson_verdict(&sample, AndersonLevel::OnePercent).unwrap();
        let loose = anderson_verdict(&sample, AndersonLevel::FifteenPercent).unwrap();
        assert!(loose.critical_value < strict.critical_value);
        assert!(!loose.is_normal || strict.is_normal);
    }
}
