//----------------------------------------
// Crate error type
//----------------------------------------
use crate::analysis::error::SettingsErr;
use crate::comparison::error::ComparisonErr;
use crate::normality::error::NormalityErr;
use crate::report::error::ReportErr;
use crate::sample::error::SampleErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DistCompareErr {
    #[error("while validating sample: {0}")]
    Sample(SampleErr),
    #[error("while assessing normality: {0}")]
    Normality(NormalityErr),
    #[error("while comparing samples: {0}")]
    Comparison(ComparisonErr),
    #[error("while validating settings: {0}")]
    Settings(SettingsErr),
    #[error("while writing report: {0}")]
    Report(ReportErr),
    #[error("while constructing distribution: {0}")]
    Distribution(String),
}

impl DistCompareErr {
    /// Wraps a `statrs` constructor failure
    pub(crate) fn distribution<E: std::fmt::Display>(e: E) -> Self {
        DistCompareErr::Distribution(e.to_string())
    }
}
