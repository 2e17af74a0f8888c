//----------------------------------------
// compute mod
//----------------------------------------
pub use crate::analysis::log::{AnalysisLog, AnalysisStep, LogEntry};
pub use crate::analysis::run::{analyze, analyze_values};
pub use crate::analysis::types::{AnalysisReport, AnalysisSettings, SampleSummary};
pub use crate::comparison::types::{
    ChiSquareResult, ComparisonMethod, ComparisonResult, TTestKind, TTestResult,
};
pub use crate::error::DistCompareErr;
pub use crate::ks::types::{KsMethod, KsResult};
pub use crate::normality::types::{
    AndersonCriterion, AndersonLevel, AndersonVerdict, NormalityAssessment, NormalityVerdict,
};
pub use crate::report::document::{render_svg, write_report};
pub use crate::sample::types::Sample;
pub use crate::scenario::Scenario;
