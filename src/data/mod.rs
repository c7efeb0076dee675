//! Job-board clients.
//!
//! Each client paginates one REST API and hands back the raw `salary`
//! sub-record of every listing it saw, one `serde_json::Value` per listing
//! (`null` when the listing has no salary). Interpreting those records is the
//! estimator's job, not the client's.

use reqwest::blocking::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::EstimatedSalary;
use crate::error::AppError;

pub mod hh;
pub mod sj;

pub use hh::HhClient;
pub use sj::SjClient;

/// Sent with every request; HeadHunter rejects requests without a User-Agent.
pub const USER_AGENT: &str = concat!("salary-stats/", env!("CARGO_PKG_VERSION"));

/// A job board that can list salary records for a programming language.
pub trait VacancySource {
    /// Human-readable title used for table headings, e.g. `HeadHunter Moscow`.
    fn title(&self) -> &str;

    /// Salary sub-records of every listing matching `language`, across all pages.
    fn fetch_salaries(&self, language: &str) -> Result<Vec<Value>, AppError>;

    /// Board-specific adjustment of an estimate made from one of this board's records.
    fn finalize_estimate(&self, estimate: EstimatedSalary) -> EstimatedSalary {
        estimate
    }
}

/// Search phrase both boards are queried with.
pub fn search_text(language: &str) -> String {
    format!("Программист {language}")
}

/// Send a request and decode a JSON body, mapping every failure to a remote error.
pub(crate) fn get_json<T: DeserializeOwned>(req: RequestBuilder, label: &str) -> Result<T, AppError> {
    let resp = req
        .send()
        .map_err(|e| AppError::remote(format!("{label} request failed: {e}")))?;

    if !resp.status().is_success() {
        return Err(AppError::remote(format!(
            "{label} request failed with status {}.",
            resp.status()
        )));
    }

    resp.json()
        .map_err(|e| AppError::remote(format!("Failed to parse {label} response: {e}")))
}

/// Drive a page-numbered listing from page 0 until `next` says stop or `max_pages` is hit.
///
/// `fetch` returns one page's salary records plus whether another page exists.
pub(crate) fn collect_pages<F>(max_pages: Option<u32>, mut fetch: F) -> Result<Vec<Value>, AppError>
where
    F: FnMut(u32) -> Result<(Vec<Value>, bool), AppError>,
{
    let mut out = Vec::new();
    let mut page = 0u32;
    loop {
        if max_pages.is_some_and(|max| page >= max) {
            tracing::debug!(page, "page cap reached");
            break;
        }
        let (records, has_more) = fetch(page)?;
        out.extend(records);
        if !has_more {
            break;
        }
        page += 1;
    }
    Ok(out)
}
