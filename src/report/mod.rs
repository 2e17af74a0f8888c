//----------------------------------------
// report mod
//----------------------------------------
pub mod density;
pub mod document;
pub mod error;
mod plots;
pub mod summary;
