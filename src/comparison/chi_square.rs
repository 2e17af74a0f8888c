use statrs::distribution::{ChiSquared, ContinuousCDF};
use tracing::debug;

use crate::comparison::error::ComparisonErr;
use crate::comparison::histogram::shared_histogram;
use crate::comparison::types::ChiSquareResult;
use crate::error::DistCompareErr;
use crate::sample::types::Sample;

/// Pearson chi-square test of independence on a 2 x K table given as
/// (row A, row B) columns. With one degree of freedom and `yates` set, each
/// observed count is moved up to 0.5 toward its expected count first.
pub fn contingency_chi_square(
    columns: &[(u64, u64)],
    yates: bool,
) -> Result<ChiSquareResult, DistCompareErr> {
    if columns.len() < 2 {
        return Err(ComparisonErr::InsufficientBins(columns.len()).into());
    }
    let row_a: f64 = columns.iter().map(|(ca, _)| *ca as f64).sum();
    let row_b: f64 = columns.iter().map(|(_, cb)| *cb as f64).sum();
    let total = row_a + row_b;
    let dof = columns.len() - 1;
    let correct = yates && dof == 1;

    let statistic: f64 = columns
        .iter()
        .flat_map(|&(ca, cb)| {
            let col = (ca + cb) as f64;
            [(ca as f64, row_a * col / total), (cb as f64, row_b * col / total)]
        })
        .map(|(observed, expected)| {
            let diff = if correct {
                let d = expected - observed;
                d - d.signum() * d.abs().min(0.5)
            } else {
                expected - observed
            };
            diff * diff / expected
        })
        .sum();

    let chi2 = ChiSquared::new(dof as f64).map_err(DistCompareErr::distribution)?;
    let p_value = chi2.sf(statistic).clamp(0.0, 1.0);
    Ok(ChiSquareResult {
        statistic,
        dof,
        p_value,
        bins_used: columns.len(),
        yates_corrected: correct,
    })
}

/// Bins A and B on a shared grid, drops bins empty in both, and tests the
/// resulting contingency table
pub fn binned_chi_square(
    a: &Sample,
    b: &Sample,
    num_bins: usize,
    yates: bool,
) -> Result<ChiSquareResult, DistCompareErr> {
    let hist = shared_histogram(a, b, num_bins);
    let columns = hist.non_empty_columns();
    debug!(
        bins = hist.num_bins(),
        non_empty = columns.len(),
        "binned samples for chi-square"
    );
    contingency_chi_square(&columns, yates)
}
