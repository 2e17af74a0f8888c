//----------------------------------------
// comparison mod
//----------------------------------------
pub mod chi_square;
pub mod compare;
pub mod error;
pub mod histogram;
pub mod types;
