//----------------------------------------
// comparison mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum TTestKind {
    /// Pooled variance, n_a + n_b - 2 degrees of freedom
    #[default]
    Pooled,
    /// Unequal variances, Welch-Satterthwaite degrees of freedom
    Welch,
}

/// Which central tendency comparison a run takes. Chosen once from the
/// normality verdicts.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum ComparisonMethod {
    Parametric,
    NonParametric,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TTestResult {
    pub kind: TTestKind,
    pub t_statistic: f64,
    pub p_value: f64,
    pub dof: f64,
    /// mean(B) - mean(A)
    pub mean_diff: f64,
    pub ci_low: f64,
    pub ci_high: f64,
    /// 1 - alpha
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChiSquareResult {
    pub statistic: f64,
    pub dof: usize,
    pub p_value: f64,
    /// Histogram bins left after dropping those empty in both samples
    pub bins_used: usize,
    pub yates_corrected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "method")]
pub enum ComparisonResult {
    #[serde(rename = "t-test")]
    TTest(TTestResult),
    #[serde(rename = "chi-square")]
    ChiSquare(ChiSquareResult),
}

impl ComparisonResult {
    pub fn method(&self) -> ComparisonMethod {
        match self {
            ComparisonResult::TTest(_) => ComparisonMethod::Parametric,
            ComparisonResult::ChiSquare(_) => ComparisonMethod::NonParametric,
        }
    }

    pub fn p_value(&self) -> f64 {
        match self {
            ComparisonResult::TTest(t) => t.p_value,
            ComparisonResult::ChiSquare(c) => c.p_value,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ComparisonResult::TTest(_) => "t-test",
            ComparisonResult::ChiSquare(_) => "chi-square",
        }
    }
}

/// Counts of both samples over the same equal-width bins
#[derive(Debug, Clone, PartialEq)]
pub struct SharedHistogram {
    pub edges: Vec<f64>,
    pub counts_a: Vec<u64>,
    pub counts_b: Vec<u64>,
}
