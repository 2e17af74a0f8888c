//----------------------------------------
// comparison errors
//----------------------------------------
use crate::error::DistCompareErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ComparisonErr {
    #[error("chi-square needs at least 2 non-empty bins; got {0}")]
    InsufficientBins(usize),
    #[error("both samples have zero variance; t statistic is undefined")]
    ZeroStandardError,
}

impl From<ComparisonErr> for DistCompareErr {
    fn from(e: ComparisonErr) -> DistCompareErr {
        DistCompareErr::Comparison(e)
    }
}
