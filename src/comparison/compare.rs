use tracing::info;

use crate::comparison::chi_square::binned_chi_square;
use crate::comparison::t_test::two_sample_t_test;
use crate::comparison::types::{ComparisonMethod, ComparisonResult, TTestKind};
use crate::error::DistCompareErr;
use crate::sample::types::Sample;

pub fn select_method(both_normal: bool) -> ComparisonMethod {
    if both_normal {
        ComparisonMethod::Parametric
    } else {
        ComparisonMethod::NonParametric
    }
}

/// Compares the central tendency of A and B with the given method
pub fn compare_central_tendency(
    a: &Sample,
    b: &Sample,
    method: ComparisonMethod,
    alpha: f64,
    num_bins: usize,
    t_test_kind: TTestKind,
    yates: bool,
) -> Result<ComparisonResult, DistCompareErr> {
    let result = match method {
        ComparisonMethod::Parametric => {
            ComparisonResult::TTest(two_sample_t_test(a, b, alpha, t_test_kind)?)
        }
        ComparisonMethod::NonParametric => {
            ComparisonResult::ChiSquare(binned_chi_square(a, b, num_bins, yates)?)
        }
    };
    info!(
        method = result.name(),
        p_value = result.p_value(),
        "central tendency compared"
    );
    Ok(result)
}
