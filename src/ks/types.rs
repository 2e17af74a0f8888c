//----------------------------------------
// ks mod types
//----------------------------------------
use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum KsMethod {
    /// Lattice path probability, used while n_a * n_b stays small
    Exact,
    /// Limiting Kolmogorov distribution
    Asymptotic,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KsResult {
    pub statistic: f64,
    pub p_value: f64,
    pub method: KsMethod,
}
