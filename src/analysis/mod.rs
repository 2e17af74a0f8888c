//----------------------------------------
// analysis mod
//----------------------------------------
pub mod error;
pub mod log;
pub mod run;
pub mod types;
