//----------------------------------------
// sample mod
//----------------------------------------
pub mod error;
pub mod subset;
pub mod types;
