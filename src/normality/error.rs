//----------------------------------------
// normality errors
//----------------------------------------
use crate::error::DistCompareErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum NormalityErr {
    #[error("arguments to quantile function should be in (0, 1); got {0}")]
    QuantileOutOfBounds(f64),
    #[error("shapiro-wilk needs at least 3 observations; got {0}")]
    TooFewObservations(usize),
    #[error("observations have zero range")]
    ZeroRange,
    #[error("could not normalise shapiro-wilk coefficients for n = {0}")]
    Coefficients(usize),
}

impl From<NormalityErr> for DistCompareErr {
    fn from(e: NormalityErr) -> DistCompareErr {
        DistCompareErr::Normality(e)
    }
}
