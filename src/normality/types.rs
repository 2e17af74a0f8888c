//----------------------------------------
// normality mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

/// Outcome of a p-value based normality test
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalityVerdict {
    pub statistic: f64,
    pub p_value: f64,
    pub is_normal: bool,
    /// Number of observations the statistic was computed on
    pub n_used: usize,
}

/// Rows of the Anderson-Darling critical value table for the normal
/// distribution, loosest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AndersonLevel {
    FifteenPercent,
    TenPercent,
    FivePercent,
    TwoPointFivePercent,
    OnePercent,
}

impl AndersonLevel {
    pub const ALL: [AndersonLevel; 5] = [
        AndersonLevel::FifteenPercent,
        AndersonLevel::TenPercent,
        AndersonLevel::FivePercent,
        AndersonLevel::TwoPointFivePercent,
        AndersonLevel::OnePercent,
    ];

    /// Significance level as a fraction, e.g. 0.05
    pub fn significance(&self) -> f64 {
        match self {
            AndersonLevel::FifteenPercent => 0.15,
            AndersonLevel::TenPercent => 0.10,
            AndersonLevel::FivePercent => 0.05,
            AndersonLevel::TwoPointFivePercent => 0.025,
            AndersonLevel::OnePercent => 0.01,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            AndersonLevel::FifteenPercent => 0,
            AndersonLevel::TenPercent => 1,
            AndersonLevel::FivePercent => 2,
            AndersonLevel::TwoPointFivePercent => 3,
            AndersonLevel::OnePercent => 4,
        }
    }

    /// Tabulated level nearest to `alpha`, and whether it matched exactly
    pub fn closest_to(alpha: f64) -> (AndersonLevel, bool) {
        let closest = AndersonLevel::ALL
            .into_iter()
            .min_by(|a, b| {
                (a.significance() - alpha)
                    .abs()
                    .total_cmp(&(b.significance() - alpha).abs())
            })
            .unwrap_or(AndersonLevel::FivePercent);
        let exact = (closest.significance() - alpha).abs() < 1e-12;
        (closest, exact)
    }

    /// Parses a percentage such as `2.5`
    pub fn from_percent(percent: f64) -> Option<AndersonLevel> {
        AndersonLevel::ALL
            .into_iter()
            .find(|level| (level.significance() * 100.0 - percent).abs() < 1e-9)
    }
}

/// Which critical value row decides the Anderson-Darling verdict
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AndersonCriterion {
    /// Row whose significance level is closest to the run's alpha
    #[default]
    MatchAlpha,
    /// Always the given row, regardless of alpha
    Fixed(AndersonLevel),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AndersonVerdict {
    pub statistic: f64,
    pub critical_values: [f64; 5],
    pub level: AndersonLevel,
    pub critical_value: f64,
    pub is_normal: bool,
}

/// Both normality tests for one sample. The sample only counts as normal
/// when both tests agree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalityAssessment {
    pub label: String,
    pub shapiro: NormalityVerdict,
    pub anderson: AndersonVerdict,
    pub is_normal: bool,
}
