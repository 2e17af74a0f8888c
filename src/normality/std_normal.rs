use statrs::distribution::{Continuous, ContinuousCDF, Normal};

use crate::error::DistCompareErr;
use crate::normality::error::NormalityErr;

/// N(0, 1) with log-tail and checked quantile helpers
#[derive(Debug, Clone, Copy)]
pub struct StdNormal(Normal);

impl StdNormal {
    pub fn new() -> Result<Self, DistCompareErr> {
        let normal = Normal::new(0.0, 1.0).map_err(DistCompareErr::distribution)?;
        Ok(Self(normal))
    }

    pub fn pdf(&self, z: f64) -> f64 {
        self.0.pdf(z)
    }

    pub fn cdf(&self, z: f64) -> f64 {
        self.0.cdf(z)
    }

    /// Upper tail, 1 - cdf(z), without cancellation for large z
    pub fn sf(&self, z: f64) -> f64 {
        self.0.sf(z)
    }

    /// Natural log of the cdf; clamps at the smallest positive double instead
    /// of returning -inf for |z| beyond ~38
    pub fn ln_cdf(&self, z: f64) -> f64 {
        self.cdf(z).max(f64::MIN_POSITIVE).ln()
    }

    pub fn ln_sf(&self, z: f64) -> f64 {
        self.sf(z).max(f64::MIN_POSITIVE).ln()
    }

    pub fn quantile(&self, p: f64) -> Result<f64, DistCompareErr> {
        if p <= 0.0 || p >= 1.0 || p.is_nan() {
            return Err(NormalityErr::QuantileOutOfBounds(p).into());
        }
        Ok(self.0.inverse_cdf(p))
    }
}
