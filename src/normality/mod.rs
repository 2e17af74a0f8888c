//----------------------------------------
// normality mod
//----------------------------------------
pub mod anderson;
pub mod assess;
pub mod error;
pub mod shapiro;
pub(crate) mod std_normal;
pub mod types;
