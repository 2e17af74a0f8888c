//----------------------------------------
// sample mod types
//----------------------------------------
use statrs::statistics::Statistics;

use crate::error::DistCompareErr;
use crate::sample::error::SampleErr;

/// A labelled, non-empty sequence of finite observations. Construction is
/// the only place values are validated; everything downstream assumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    label: String,
    values: Vec<f64>,
}

impl Sample {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Result<Self, DistCompareErr> {
        let label = label.into();
        if values.is_empty() {
            return Err(SampleErr::Empty(label).into());
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(SampleErr::NonFinite { label, index }.into());
        }
        Ok(Self { label, values })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mean(&self) -> f64 {
        self.values.iter().mean()
    }

    /// Unbiased (n - 1) variance; NaN for a single observation
    pub fn variance(&self) -> f64 {
        self.values.iter().variance()
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Ascending copy of the observations
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_unstable_by(f64::total_cmp);
        sorted
    }

    pub fn require_len(&self, min: usize) -> Result<(), DistCompareErr> {
        if self.len() < min {
            return Err(SampleErr::TooSmall {
                label: self.label.clone(),
                len: self.len(),
                min,
            }
            .into());
        }
        Ok(())
    }

    /// Fails with `Degenerate` if every observation is the same value
    pub fn require_spread(&self) -> Result<(), DistCompareErr> {
        if self.max() - self.min() <= 0.0 {
            return Err(SampleErr::Degenerate(self.label.clone()).into());
        }
        Ok(())
    }
}
