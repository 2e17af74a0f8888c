//----------------------------------------
// settings errors
//----------------------------------------
use crate::error::DistCompareErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SettingsErr {
    #[error("alpha should be in (0, 1); got {0}")]
    BadAlpha(f64),
    #[error("subset size should be at least 3; got {0}")]
    BadSubsetSize(usize),
    #[error("bin count should be at least 1; got {0}")]
    BadBinCount(usize),
    #[error("could not read settings file: {0}")]
    Read(String),
}

impl From<SettingsErr> for DistCompareErr {
    fn from(e: SettingsErr) -> DistCompareErr {
        DistCompareErr::Settings(e)
    }
}
