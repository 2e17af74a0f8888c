use std::fmt;

use serde::Serialize;
use tracing::debug;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum AnalysisStep {
    Normality,
    Comparison,
    Distribution,
}

impl fmt::Display for AnalysisStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnalysisStep::Normality => "normality",
            AnalysisStep::Comparison => "comparison",
            AnalysisStep::Distribution => "distribution",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub step: AnalysisStep,
    pub message: String,
}

/// Diagnostics collected while a run progresses. Each step appends to the
/// log it is handed and the finished log travels with the report.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct AnalysisLog {
    entries: Vec<LogEntry>,
}

impl AnalysisLog {
    pub fn record(&mut self, step: AnalysisStep, message: impl Into<String>) {
        let message = message.into();
        debug!(%step, "{message}");
        self.entries.push(LogEntry { step, message });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn for_step(&self, step: AnalysisStep) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.step == step)
    }
}
