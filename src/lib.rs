//! `salary-stats` library crate.
//!
//! The binary (`salary`) is a thin wrapper around this library so that:
//!
//! - the estimation/aggregation core is testable without network access
//! - the two job boards sit behind one trait and can be faked in tests
//! - presentation stays separate from the numbers it prints

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod salary;
