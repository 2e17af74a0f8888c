//----------------------------------------
// report errors
//----------------------------------------
use crate::error::DistCompareErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportErr {
    #[error("failed to create drawing area: {0}")]
    DrawingArea(String),
    #[error("failed to configure chart: {0}")]
    ChartConfig(String),
    #[error("failed to draw chart elements: {0}")]
    Drawing(String),
    #[error("failed to write {0}")]
    Write(String),
    #[error("failed to serialize report: {0}")]
    Serialize(String),
}

impl From<ReportErr> for DistCompareErr {
    fn from(e: ReportErr) -> DistCompareErr {
        DistCompareErr::Report(e)
    }
}
