use rand::Rng;
use tracing::info;

use crate::analysis::log::{AnalysisLog, AnalysisStep};
use crate::analysis::types::{AnalysisReport, AnalysisSettings, SampleSummary};
use crate::comparison::compare::{compare_central_tendency, select_method};
use crate::comparison::types::ComparisonResult;
use crate::error::DistCompareErr;
use crate::ks::ks_2samp::ks_two_sample;
use crate::normality::assess::{assess_normality, both_normal};
use crate::normality::types::NormalityAssessment;
use crate::sample::types::Sample;

fn log_normality(log: &mut AnalysisLog, sample: &Sample, assessment: &NormalityAssessment) {
    let shapiro = &assessment.shapiro;
    log.record(
        AnalysisStep::Normality,
        format!(
            "{}: shapiro-wilk W = {:.5}, p = {:.4e} on {} of {} observations",
            sample.label(),
            shapiro.statistic,
            shapiro.p_value,
            shapiro.n_used,
            sample.len()
        ),
    );
    let anderson = &assessment.anderson;
    log.record(
        AnalysisStep::Normality,
        format!(
            "{}: anderson-darling A2 = {:.4}, critical value at {}% = {:.3}",
            sample.label(),
            anderson.statistic,
            anderson.level.significance() * 100.0,
            anderson.critical_value
        ),
    );
}

/// Runs the whole comparison of A against B.
///
/// Normality of each sample is assessed first (the Shapiro-Wilk subset of A
/// is drawn from `rng` before B's). If all four normality verdicts hold the
/// means are compared with a t-test, otherwise binned frequencies are
/// compared with a chi-square test. The Kolmogorov-Smirnov test runs either
/// way. Any failure aborts the run.
pub fn analyze<R: Rng + ?Sized>(
    a: &Sample,
    b: &Sample,
    settings: &AnalysisSettings,
    rng: &mut R,
) -> Result<AnalysisReport, DistCompareErr> {
    settings.validate()?;
    let mut log = AnalysisLog::default();

    //----------------------------------------
    // Normality
    //----------------------------------------
    let normality_a = assess_normality(
        a,
        settings.alpha,
        settings.subset_size,
        settings.anderson_criterion,
        rng,
    )?;
    log_normality(&mut log, a, &normality_a);
    let normality_b = assess_normality(
        b,
        settings.alpha,
        settings.subset_size,
        settings.anderson_criterion,
        rng,
    )?;
    log_normality(&mut log, b, &normality_b);
    let both = both_normal(&normality_a, &normality_b);

    //----------------------------------------
    // Central tendency
    //----------------------------------------
    let method = select_method(both);
    let comparison = compare_central_tendency(
        a,
        b,
        method,
        settings.alpha,
        settings.num_bins,
        settings.t_test_kind,
        settings.yates_correction,
    )?;
    log.record(
        AnalysisStep::Comparison,
        match &comparison {
            ComparisonResult::TTest(t) => format!(
                "both samples normal; t-test t = {:.4}, p = {:.4e}, mean diff = {:.4}",
                t.t_statistic, t.p_value, t.mean_diff
            ),
            ComparisonResult::ChiSquare(c) => format!(
                "normality rejected; chi-square = {:.4}, dof = {}, p = {:.4e} over {} bins",
                c.statistic, c.dof, c.p_value, c.bins_used
            ),
        },
    );

    //----------------------------------------
    // Distribution
    //----------------------------------------
    let ks = ks_two_sample(a, b);
    log.record(
        AnalysisStep::Distribution,
        format!(
            "kolmogorov-smirnov D = {:.5}, p = {:.4e} ({:?})",
            ks.statistic, ks.p_value, ks.method
        ),
    );

    info!(
        both_normal = both,
        method = comparison.name(),
        ks_p_value = ks.p_value,
        "analysis finished"
    );
    Ok(AnalysisReport {
        settings: *settings,
        summary_a: SampleSummary::from(a),
        summary_b: SampleSummary::from(b),
        normality_a,
        normality_b,
        both_normal: both,
        method,
        comparison,
        ks,
        log,
    })
}

/// Labels raw vectors "A" and "B" and analyzes them
pub fn analyze_values<R: Rng + ?Sized>(
    a: Vec<f64>,
    b: Vec<f64>,
    settings: &AnalysisSettings,
    rng: &mut R,
) -> Result<AnalysisReport, DistCompareErr> {
    let a = Sample::new("A", a)?;
    let b = Sample::new("B", b)?;
    analyze(&a, &b, settings, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::error::ComparisonErr;
    use crate::comparison::types::ComparisonMethod;
    use crate::ks::types::KsMethod;
    use crate::normality::types::AndersonLevel;
    use crate::sample::error::SampleErr;
    use crate::scenario::Scenario;
    use rand::{SeedableRng, rngs};

    fn grid(n: usize, shift: f64) -> Vec<f64> {
        (1..=n).map(|i| i as f64 + shift).collect()
    }

    #[test]
    fn same_normal_takes_t_test() {
        // data seed 1 and analysis seed 2 are the binary's defaults
        let mut data_rng = rngs::StdRng::seed_from_u64(1);
        let (a, b) = Scenario::SameNormal.generate(100_000, &mut data_rng).unwrap();
        let mut rng = rngs::StdRng::seed_from_u64(2);
        let report = analyze(&a, &b, &AnalysisSettings::default(), &mut rng).unwrap();

        assert_eq!(
            report.normality_a.anderson.level,
            AndersonLevel::FivePercent
        );
        assert!(report.both_normal);
        assert_eq!(report.method, ComparisonMethod::Parametric);
        if let ComparisonResult::TTest(t) = report.comparison {
            assert!(t.mean_diff.abs() < 0.5);
            assert!(t.ci_low <= t.mean_diff && t.mean_diff <= t.ci_high);
        } else {
            panic!()
        }
        assert_eq!(report.normality_a.shapiro.n_used, 5000);
        assert_eq!(report.ks.method, KsMethod::Asymptotic);
    }

    #[test]
    fn normal_vs_gamma_takes_chi_square() {
        let mut data_rng = rngs::StdRng::seed_from_u64(42);
        let (a, b) = Scenario::NormalVsGamma
            .generate(1_000_000, &mut data_rng)
            .unwrap();
        let mut rng = rngs::StdRng::seed_from_u64(43);
        let report = analyze(&a, &b, &AnalysisSettings::default(), &mut rng).unwrap();

        assert!(!report.both_normal);
        assert!(!report.normality_b.shapiro.is_normal);
        assert!(!report.normality_b.anderson.is_normal);
        assert_eq!(report.method, ComparisonMethod::NonParametric);
        assert!(matches!(report.comparison, ComparisonResult::ChiSquare(_)));
        assert!(report.ks.p_value < 1e-10);
    }

    #[test]
    fn branch_matches_all_four_verdicts() {
        let mut rng = rngs::StdRng::seed_from_u64(5);
        let skewed: Vec<f64> = (1..=300).map(|i| (i as f64 / 30.0).exp()).collect();
        for (a, b) in [(grid(8, 0.0), grid(8, 0.5)), (grid(8, 0.0), skewed)] {
            let report =
                analyze_values(a, b, &AnalysisSettings::default(), &mut rng).unwrap();
            let all_four = report.normality_a.shapiro.is_normal
                && report.normality_b.shapiro.is_normal
                && report.normality_a.anderson.is_normal
                && report.normality_b.anderson.is_normal;
            assert_eq!(report.both_normal, all_four);
            assert_eq!(
                report.method == ComparisonMethod::Parametric,
                all_four
            );
        }
    }

    #[test]
    fn ks_independent_of_branch() {
        let a = Sample::new("A", grid(8, 0.0)).unwrap();
        let b = Sample::new("B", grid(8, 0.5)).unwrap();
        let mut methods = Vec::new();
        let mut ks_results = Vec::new();
        for alpha in [0.01, 0.05, 0.5, 0.999] {
            let settings = AnalysisSettings {
                alpha,
                ..Default::default()
            };
            let mut rng = rngs::StdRng::seed_from_u64(11);
            let report = analyze(&a, &b, &settings, &mut rng).unwrap();
            methods.push(report.method);
            ks_results.push(report.ks);
        }
        assert!(methods.contains(&ComparisonMethod::Parametric));
        assert!(methods.contains(&ComparisonMethod::NonParametric));
        assert!(ks_results.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn reruns_are_bit_identical() {
        let mut data_rng = rngs::StdRng::seed_from_u64(3);
        let (a, b) = Scenario::NormalVsGamma.generate(20_000, &mut data_rng).unwrap();
        let settings = AnalysisSettings::default();
        let first = analyze(&a, &b, &settings, &mut rngs::StdRng::seed_from_u64(9)).unwrap();
        let second = analyze(&a, &b, &settings, &mut rngs::StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_err() {
        let mut rng = rngs::StdRng::seed_from_u64(1);
        let res = analyze_values(vec![], grid(10, 0.0), &AnalysisSettings::default(), &mut rng);
        assert!(matches!(
            res,
            Err(DistCompareErr::Sample(SampleErr::Empty(_)))
        ));
    }

    #[test]
    fn degenerate_input_err() {
        let mut rng = rngs::StdRng::seed_from_u64(1);
        let res = analyze_values(
            grid(10, 0.0),
            vec![7.0; 10],
            &AnalysisSettings::default(),
            &mut rng,
        );
        assert!(matches!(
            res,
            Err(DistCompareErr::Sample(SampleErr::Degenerate(_)))
        ));
    }

    #[test]
    fn single_bin_chi_square_err() {
        let mut rng = rngs::StdRng::seed_from_u64(1);
        let skewed: Vec<f64> = (1..=300).map(|i| (i as f64 / 30.0).exp()).collect();
        let settings = AnalysisSettings {
            num_bins: 1,
            ..Default::default()
        };
        let res = analyze_values(grid(50, 0.0), skewed, &settings, &mut rng);
        assert!(matches!(
            res,
            Err(DistCompareErr::Comparison(ComparisonErr::InsufficientBins(1)))
        ));
    }

    #[test]
    fn log_records_every_step() {
        let mut rng = rngs::StdRng::seed_from_u64(2);
        let report = analyze_values(
            grid(8, 0.0),
            grid(8, 0.5),
            &AnalysisSettings::default(),
            &mut rng,
        )
        .unwrap();
        assert_eq!(report.log.for_step(AnalysisStep::Normality).count(), 4);
        assert_eq!(report.log.for_step(AnalysisStep::Comparison).count(), 1);
        assert_eq!(report.log.for_step(AnalysisStep::Distribution).count(), 1);
    }
}
