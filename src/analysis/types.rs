//----------------------------------------
// analysis mod types
//----------------------------------------
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::error::SettingsErr;
use crate::analysis::log::AnalysisLog;
use crate::comparison::types::{ComparisonMethod, ComparisonResult, TTestKind};
use crate::error::DistCompareErr;
use crate::ks::types::KsResult;
use crate::normality::types::{AndersonCriterion, NormalityAssessment};
use crate::sample::types::Sample;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Significance level shared by every test in the run
    pub alpha: f64,
    /// Observations drawn for the Shapiro-Wilk test
    pub subset_size: usize,
    /// Histogram bins for the chi-square comparison
    pub num_bins: usize,
    pub anderson_criterion: AndersonCriterion,
    pub t_test_kind: TTestKind,
    pub yates_correction: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            subset_size: 5000,
            num_bins: 20,
            anderson_criterion: AndersonCriterion::MatchAlpha,
            t_test_kind: TTestKind::Pooled,
            yates_correction: true,
        }
    }
}

impl AnalysisSettings {
    pub fn validate(&self) -> Result<(), DistCompareErr> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(SettingsErr::BadAlpha(self.alpha).into());
        }
        if self.subset_size < 3 {
            return Err(SettingsErr::BadSubsetSize(self.subset_size).into());
        }
        if self.num_bins < 1 {
            return Err(SettingsErr::BadBinCount(self.num_bins).into());
        }
        Ok(())
    }

    /// Reads settings from a json file; missing fields take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self, DistCompareErr> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| SettingsErr::Read(format!("{}: {e}", path.display())))?;
        let settings: AnalysisSettings = serde_json::from_str(&text)
            .map_err(|e| SettingsErr::Read(format!("{}: {e}", path.display())))?;
        settings.validate()?;
        Ok(settings)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleSummary {
    pub label: String,
    pub n: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl From<&Sample> for SampleSummary {
    fn from(sample: &Sample) -> Self {
        Self {
            label: sample.label().to_string(),
            n: sample.len(),
            mean: sample.mean(),
            std_dev: sample.std_dev(),
            min: sample.min(),
            max: sample.max(),
        }
    }
}

/// Everything a run produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub settings: AnalysisSettings,
    pub summary_a: SampleSummary,
    pub summary_b: SampleSummary,
    pub normality_a: NormalityAssessment,
    pub normality_b: NormalityAssessment,
    pub both_normal: bool,
    pub method: ComparisonMethod,
    pub comparison: ComparisonResult,
    pub ks: KsResult,
    pub log: AnalysisLog,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normality::types::AndersonLevel;
    use std::io::Write;

    #[test]
    fn default_settings_valid() {
        assert!(AnalysisSettings::default().validate().is_ok());
    }

    #[test]
    fn bad_alpha_err() {
        let settings = AnalysisSettings {
            alpha: 1.5,
            ..Default::default()
        };
        if let Err(e) = settings.validate() {
            assert_eq!(
                String::from("while validating settings: alpha should be in (0, 1); got 1.5"),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn zero_bins_err() {
        let settings = AnalysisSettings {
            num_bins: 0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(DistCompareErr::Settings(SettingsErr::BadBinCount(0)))
        ));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"alpha": 0.01, "anderson_criterion": {{"Fixed": "OnePercent"}}}}"#
        )
        .unwrap();
        let settings = AnalysisSettings::from_json_file(file.path()).unwrap();
        assert_eq!(settings.alpha, 0.01);
        assert_eq!(
            settings.anderson_criterion,
            AndersonCriterion::Fixed(AndersonLevel::OnePercent)
        );
        assert_eq!(settings.subset_size, 5000);
        assert_eq!(settings.num_bins, 20);
    }
}
