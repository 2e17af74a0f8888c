//----------------------------------------
// Synthetic data sets
//----------------------------------------
use clap::ValueEnum;
use rand::Rng;
use rand::distributions::Distribution;
use serde::{Deserialize, Serialize};
use statrs::distribution::{Gamma, Normal};

use crate::error::DistCompareErr;
use crate::sample::types::Sample;

const NORMAL_MEAN: f64 = 50.0;
const NORMAL_SD: f64 = 10.0;
const GAMMA_SHAPE: f64 = 5.0;
const GAMMA_SCALE: f64 = 10.0;

#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize, ValueEnum)]
pub enum Scenario {
    /// A and B both ~ Normal(50, 10)
    #[default]
    SameNormal,
    /// A ~ Normal(50, 10), B ~ Gamma(shape 5, scale 10)
    NormalVsGamma,
}

fn draw<D, R>(dist: D, n: usize, rng: &mut R) -> Vec<f64>
where
    D: Distribution<f64>,
    R: Rng + ?Sized,
{
    dist.sample_iter(rng).take(n).collect()
}

impl Scenario {
    /// Draws n observations for each of A and B, A first
    pub fn generate<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<(Sample, Sample), DistCompareErr> {
        let normal = Normal::new(NORMAL_MEAN, NORMAL_SD).map_err(DistCompareErr::distribution)?;
        let a = draw(normal, n, rng);
        let b = match self {
            Scenario::SameNormal => draw(normal, n, rng),
            Scenario::NormalVsGamma => {
                let gamma = Gamma::new(GAMMA_SHAPE, 1.0 / GAMMA_SCALE)
                    .map_err(DistCompareErr::distribution)?;
                draw(gamma, n, rng)
            }
        };
        Ok((Sample::new("A", a)?, Sample::new("B", b)?))
    }
}
