//----------------------------------------
// Root lib
//----------------------------------------
//! The purpose of this library is to compare two numeric samples. Each
//! sample is checked for normality, the central tendencies are compared with
//! either a t-test or a binned chi-square test depending on that verdict, and
//! a two-sample Kolmogorov-Smirnov test is always run. The results can be
//! written out as an SVG report.

/// Sample assembly, summaries and the end-to-end pipeline
pub mod analysis;
/// Tests of central tendency
pub mod comparison;
/// This module houses the public API
pub mod compute;
/// This module contains error types
pub mod error;
pub mod ks;
pub mod normality;
pub mod report;
pub mod sample;
pub mod scenario;
