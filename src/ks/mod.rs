//----------------------------------------
// ks mod
//----------------------------------------
pub(crate) mod kolmogorov;
pub mod ks_2samp;
pub mod types;
