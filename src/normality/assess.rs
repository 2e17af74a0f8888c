use rand::Rng;
use tracing::info;

use crate::error::DistCompareErr;
use crate::normality::anderson::anderson_verdict;
use crate::normality::shapiro::subset_shapiro;
use crate::normality::types::{AndersonCriterion, NormalityAssessment};
use crate::sample::types::Sample;

/// Runs the subset Shapiro-Wilk test and the full-sample Anderson-Darling
/// test on one sample. Degenerate samples are rejected up front so neither
/// test sees them.
pub fn assess_normality<R: Rng + ?Sized>(
    sample: &Sample,
    alpha: f64,
    subset_size: usize,
    criterion: AndersonCriterion,
    rng: &mut R,
) -> Result<NormalityAssessment, DistCompareErr> {
    sample.require_len(3)?;
    sample.require_spread()?;

    let shapiro = subset_shapiro(sample, subset_size, alpha, rng)?;
    let anderson = anderson_verdict(sample, criterion.resolve(alpha))?;
    let is_normal = shapiro.is_normal && anderson.is_normal;
    info!(
        sample = sample.label(),
        shapiro_normal = shapiro.is_normal,
        anderson_normal = anderson.is_normal,
        is_normal,
        "normality assessed"
    );
    Ok(NormalityAssessment {
        label: sample.label().to_string(),
        shapiro,
        anderson,
        is_normal,
    })
}

/// True only when all four verdicts (two tests, two samples) say normal
pub fn both_normal(a: &NormalityAssessment, b: &NormalityAssessment) -> bool {
    [
        a.shapiro.is_normal,
        b.shapiro.is_normal,
        a.anderson.is_normal,
        b.anderson.is_normal,
    ]
    .iter()
    .all(|&v| v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normality::types::{AndersonLevel, AndersonVerdict, NormalityVerdict};
    use crate::sample::error::SampleErr;
    use itertools::iproduct;
    use rand::{SeedableRng, rngs};

    fn assessment(shapiro_normal: bool, anderson_normal: bool) -> NormalityAssessment {
        NormalityAssessment {
            label: String::from("A"),
            shapiro: NormalityVerdict {
                statistic: 0.99,
                p_value: 0.5,
                is_normal: shapiro_normal,
                n_used: 100,
            },
            anderson: AndersonVerdict {
                statistic: 0.3,
                critical_values: [0.5; 5],
                level: AndersonLevel::FivePercent,
                critical_value: 0.5,
                is_normal: anderson_normal,
            },
            is_normal: shapiro_normal && anderson_normal,
        }
    }

    #[test]
    fn both_normal_is_conjunction_of_four() {
        for (sa, sb, aa, ab) in iproduct!([true, false], [true, false], [true, false], [true, false])
        {
            let a = assessment(sa, aa);
            let b = assessment(sb, ab);
            assert_eq!(both_normal(&a, &b), sa && sb && aa && ab);
        }
    }

    #[test]
    fn zero_variance_is_invalid_sample() {
        let mut rng = rngs::StdRng::seed_from_u64(1);
        let sample = Sample::new("A", vec![2.5; 50]).unwrap();
        let res = assess_normality(&sample, 0.05, 5000, AndersonCriterion::MatchAlpha, &mut rng);
        assert!(matches!(
            res,
            Err(DistCompareErr::Sample(SampleErr::Degenerate(_)))
        ));
    }

    #[test]
    fn two_values_is_invalid_sample() {
        let mut rng = rngs::StdRng::seed_from_u64(1);
        let sample = Sample::new("A", vec![1.0, 2.0]).unwrap();
        let res = assess_normality(&sample, 0.05, 5000, AndersonCriterion::MatchAlpha, &mut rng);
        assert!(matches!(
            res,
            Err(DistCompareErr::Sample(SampleErr::TooSmall { .. }))
        ));
    }
}
