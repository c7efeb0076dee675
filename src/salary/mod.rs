//! Salary normalization and aggregation core.
//!
//! - `estimator`: one raw salary record -> one comparable figure (or `Unusable`)
//! - `aggregate`: many `(language, estimate)` samples -> per-language statistics
//!
//! Both are pure functions with no I/O.

pub mod aggregate;
pub mod estimator;

pub use aggregate::aggregate;
pub use estimator::{estimate, estimate_json, parse_raw_salary};
