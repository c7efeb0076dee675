//! Shared domain types.
//!
//! These types are intentionally small value types so they can be:
//!
//! - built from raw API records by the fetch clients
//! - reduced by the estimator/aggregator without I/O
//! - rendered or exported by the presentation layer

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::AppError;

/// Languages queried when the user does not pass `--language`.
pub const DEFAULT_LANGUAGES: [&str; 10] = [
    "Java",
    "PHP",
    "C++",
    "R",
    "Python",
    "JavaScript",
    "Delphi",
    "Go",
    "1C",
    "Ruby",
];

/// National currency under the spellings used by HeadHunter (`RUR`) and SuperJob (`rub`).
pub const DEFAULT_CURRENCIES: [&str; 2] = ["RUR", "rub"];

/// One listing's compensation sub-record as delivered by a job board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSalary {
    pub currency: Option<String>,
    pub from: Option<u64>,
    pub to: Option<u64>,
}

/// Point estimate in the target currency, or `Unusable` when no reliable figure exists.
///
/// `Unusable` listings still count towards `vacancies_found`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimatedSalary {
    Value(u64),
    Unusable,
}

impl EstimatedSalary {
    pub fn value(self) -> Option<u64> {
        match self {
            EstimatedSalary::Value(v) => Some(v),
            EstimatedSalary::Unusable => None,
        }
    }
}

/// A `(language, estimate)` pair. The language is compared as an exact string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSample {
    pub language: String,
    pub estimate: EstimatedSalary,
}

impl LanguageSample {
    pub fn new(language: impl Into<String>, estimate: EstimatedSalary) -> Self {
        Self {
            language: language.into(),
            estimate,
        }
    }
}

/// Floor-average of the usable estimates, or `NoData` when there were none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AverageSalary {
    Amount(u64),
    NoData,
}

impl AverageSalary {
    pub fn amount(self) -> Option<u64> {
        match self {
            AverageSalary::Amount(v) => Some(v),
            AverageSalary::NoData => None,
        }
    }
}

impl fmt::Display for AverageSalary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AverageSalary::Amount(v) => write!(f, "{v}"),
            AverageSalary::NoData => write!(f, "No Data"),
        }
    }
}

/// Per-language summary. `vacancies_processed <= vacancies_found` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageStatistics {
    pub vacancies_found: usize,
    pub vacancies_processed: usize,
    pub average_salary: AverageSalary,
}

/// Weight applied to a lone salary bound (`to * factor_top`, `from * factor_bottom`).
///
/// Stored in millionths so the weighted bound is an exact integer floor:
/// `0.8` is kept as `800_000`, and `100_000 * 0.8` is computed as `100_000 * 800_000 / 1_000_000`.
/// Weights with more than six decimal places are rejected rather than rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Factor {
    millionths: u64,
}

impl Factor {
    pub const SCALE: u64 = 1_000_000;

    pub const fn from_millionths(millionths: u64) -> Self {
        Self { millionths }
    }

    /// Parse a decimal weight such as `0.8` or `1.2`.
    pub fn new(value: f64) -> Result<Self, AppError> {
        if !(value.is_finite() && value >= 0.0) {
            return Err(AppError::config(format!(
                "Salary factor must be a finite non-negative number, got {value}."
            )));
        }
        let exact = value * Self::SCALE as f64;
        let scaled = exact.round();
        if scaled > u32::MAX as f64 {
            return Err(AppError::config(format!("Salary factor {value} is too large.")));
        }
        // Tolerance only absorbs binary representation error of decimal input.
        if (exact - scaled).abs() > 1e-3 {
            return Err(AppError::config(format!(
                "Salary factor {value} has more than 6 decimal places."
            )));
        }
        Ok(Self::from_millionths(scaled as u64))
    }

    /// `floor(bound * factor)`, or `None` on overflow.
    pub fn apply(self, bound: u64) -> Option<u64> {
        let product = (bound as u128).checked_mul(self.millionths as u128)?;
        u64::try_from(product / Self::SCALE as u128).ok()
    }
}

/// Policy knobs for the salary estimator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Currency codes accepted as the target currency (ASCII case-insensitive).
    pub accepted_currencies: Vec<String>,
    /// Weight applied when only the upper bound is known.
    pub factor_top: Factor,
    /// Weight applied when only the lower bound is known.
    pub factor_bottom: Factor,
}

impl EstimatorConfig {
    /// Divisor used when both bounds are known.
    pub const MIDPOINT_DIVISOR: u64 = 2;

    pub fn accepts_currency(&self, currency: &str) -> bool {
        self.accepted_currencies
            .iter()
            .any(|c| c.eq_ignore_ascii_case(currency))
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            accepted_currencies: DEFAULT_CURRENCIES.iter().map(|c| c.to_string()).collect(),
            factor_top: Factor::from_millionths(800_000),
            factor_bottom: Factor::from_millionths(1_200_000),
        }
    }
}

/// Which job board(s) a run queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Hh,
    Sj,
}

impl SourceKind {
    pub fn display_name(self) -> &'static str {
        match self {
            SourceKind::Hh => "HeadHunter",
            SourceKind::Sj => "SuperJob",
        }
    }
}

/// HeadHunter query settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HhQuery {
    pub area: u32,
    pub period_days: u32,
    pub per_page: u32,
}

/// SuperJob query settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SjQuery {
    pub town: String,
    pub catalogue: u32,
    pub per_page: u32,
}

/// Fully resolved configuration for a single `salary` invocation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub sources: Vec<SourceKind>,
    pub languages: Vec<String>,
    pub estimator: EstimatorConfig,
    pub hh: HhQuery,
    pub sj: SjQuery,
    /// Region name shown in table titles, e.g. `HeadHunter Moscow`.
    pub region_label: String,
    /// Upper bound on pages fetched per language, per source.
    pub max_pages: Option<u32>,
    pub export: Option<PathBuf>,
}

impl RunConfig {
    /// Languages sorted and de-duplicated, in the order they are queried and displayed.
    pub fn normalized_languages(&self) -> Vec<String> {
        let mut out = self.languages.clone();
        out.sort();
        out.dedup();
        out
    }
}
