//----------------------------------------
// sample errors
//----------------------------------------
use crate::error::DistCompareErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SampleErr {
    #[error("sample '{0}' is empty")]
    Empty(String),
    #[error("sample '{label}' has a non-finite value at index {index}")]
    NonFinite { label: String, index: usize },
    #[error("sample '{0}' has zero variance (degenerate distribution)")]
    Degenerate(String),
    #[error("sample '{label}' has {len} observations; at least {min} are required")]
    TooSmall {
        label: String,
        len: usize,
        min: usize,
    },
}

impl From<SampleErr> for DistCompareErr {
    fn from(e: SampleErr) -> DistCompareErr {
        DistCompareErr::Sample(e)
    }
}
