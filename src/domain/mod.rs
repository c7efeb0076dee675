//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - raw and estimated salary values (`RawSalary`, `EstimatedSalary`)
//! - per-language samples and statistics (`LanguageSample`, `LanguageStatistics`)
//! - run configuration (`EstimatorConfig`, `RunConfig`, query settings)

pub mod types;

pub use types::*;
