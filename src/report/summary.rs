use std::fmt;

use crate::analysis::types::{AnalysisReport, SampleSummary};
use crate::comparison::types::ComparisonResult;
use crate::error::DistCompareErr;
use crate::normality::types::NormalityAssessment;
use crate::report::error::ReportErr;

fn verdict(is_normal: bool) -> &'static str {
    if is_normal { "normal" } else { "not normal" }
}

fn sample_line(s: &SampleSummary) -> String {
    format!(
        "{}: n = {}, mean = {:.4}, sd = {:.4}, min = {:.4}, max = {:.4}",
        s.label, s.n, s.mean, s.std_dev, s.min, s.max
    )
}

fn normality_lines(n: &NormalityAssessment) -> [String; 2] {
    [
        format!(
            "  {} shapiro-wilk      W = {:.5}  p = {:.4e}  (n = {})  -> {}",
            n.label,
            n.shapiro.statistic,
            n.shapiro.p_value,
            n.shapiro.n_used,
            verdict(n.shapiro.is_normal)
        ),
        format!(
            "  {} anderson-darling  A2 = {:.4}  critical({}%) = {:.3}  -> {}",
            n.label,
            n.anderson.statistic,
            n.anderson.level.significance() * 100.0,
            n.anderson.critical_value,
            verdict(n.anderson.is_normal)
        ),
    ]
}

/// One-line annotation of the comparison outcome for figure captions
pub fn comparison_annotation(report: &AnalysisReport) -> String {
    match &report.comparison {
        ComparisonResult::TTest(t) => format!(
            "t-test p = {:.3e}, {:.0}% CI [{:.3}, {:.3}]",
            t.p_value,
            t.confidence * 100.0,
            t.ci_low,
            t.ci_high
        ),
        ComparisonResult::ChiSquare(c) => format!("chi-square p = {:.3e}", c.p_value),
    }
}

/// The text page of the report, line by line
pub fn summary_lines(report: &AnalysisReport) -> Vec<String> {
    let s = &report.settings;
    let mut lines = vec![
        String::from("Distribution comparison report"),
        format!(
            "alpha = {}, shapiro subset = {}, chi-square bins = {}",
            s.alpha, s.subset_size, s.num_bins
        ),
        String::new(),
        String::from("Samples"),
        format!("  {}", sample_line(&report.summary_a)),
        format!("  {}", sample_line(&report.summary_b)),
        String::new(),
        String::from("Normality"),
    ];
    lines.extend(normality_lines(&report.normality_a));
    lines.extend(normality_lines(&report.normality_b));
    lines.push(format!(
        "  both normal: {}",
        if report.both_normal { "yes" } else { "no" }
    ));
    lines.push(String::new());

    lines.push(String::from("Central tendency"));
    match &report.comparison {
        ComparisonResult::TTest(t) => {
            lines.push(format!(
                "  {:?} t-test  t = {:.4}  dof = {:.1}  p = {:.4e}",
                t.kind, t.t_statistic, t.dof, t.p_value
            ));
            lines.push(format!(
                "  mean(B) - mean(A) = {:.4}  {:.0}% CI [{:.4}, {:.4}]",
                t.mean_diff,
                t.confidence * 100.0,
                t.ci_low,
                t.ci_high
            ));
        }
        ComparisonResult::ChiSquare(c) => {
            lines.push(format!(
                "  chi-square  statistic = {:.4}  dof = {}  p = {:.4e}",
                c.statistic, c.dof, c.p_value
            ));
            lines.push(format!(
                "  {} non-empty bins{}",
                c.bins_used,
                if c.yates_corrected {
                    ", yates corrected"
                } else {
                    ""
                }
            ));
        }
    }
    lines.push(String::new());

    lines.push(String::from("Distribution"));
    lines.push(format!(
        "  kolmogorov-smirnov ({:?})  D = {:.5}  p = {:.4e}",
        report.ks.method, report.ks.statistic, report.ks.p_value
    ));
    lines.push(String::new());

    lines.push(String::from("Log"));
    lines.extend(
        report
            .log
            .entries()
            .iter()
            .map(|e| format!("  [{}] {}", e.step, e.message)),
    );
    lines
}

impl AnalysisReport {
    /// Pretty-printed JSON of the whole report
    pub fn to_json(&self) -> Result<String, DistCompareErr> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ReportErr::Serialize(e.to_string()))?;
        Ok(json)
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in summary_lines(self) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::run::analyze_values;
    use crate::analysis::types::AnalysisSettings;
    use rand::{SeedableRng, rngs};

    #[test]
    fn summary_mentions_every_test() {
        let mut rng = rngs::StdRng::seed_from_u64(1);
        let a: Vec<f64> = (1..=8).map(|i| i as f64).collect();
        let b: Vec<f64> = (1..=200).map(|i| (i as f64 / 20.0).exp()).collect();
        let report = analyze_values(a, b, &AnalysisSettings::default(), &mut rng).unwrap();
        let text = report.to_string();
        assert!(text.contains("shapiro-wilk"));
        assert!(text.contains("anderson-darling"));
        assert!(text.contains("chi-square"));
        assert!(text.contains("kolmogorov-smirnov"));
        assert!(text.contains("both normal: no"));
        assert!(comparison_annotation(&report).starts_with("chi-square p ="));
    }

    #[test]
    fn json_tags_comparison_method() {
        let mut rng = rngs::StdRng::seed_from_u64(1);
        let a: Vec<f64> = (1..=8).map(|i| i as f64).collect();
        let b: Vec<f64> = (1..=8).map(|i| i as f64 + 0.5).collect();
        let report = analyze_values(a, b, &AnalysisSettings::default(), &mut rng).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["comparison"]["method"], "t-test");
        assert_eq!(value["both_normal"], true);
        assert!(value["settings"].get("seed").is_none());
    }

    #[test]
    fn serialize_err_message() {
        let e: DistCompareErr = ReportErr::Serialize(String::from("bad float")).into();
        assert_eq!(
            String::from("while writing report: failed to serialize report: bad float"),
            format!("{}", e)
        );
    }
}
