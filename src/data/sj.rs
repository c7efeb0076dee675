//! SuperJob (`api.superjob.ru`) vacancy search.
//!
//! Requires an application secret key (`SUPERJOB_API_KEY`), sent as `X-Api-App-Id`.
//!
//! SuperJob publishes an unstated bound as `0`. Bounds are estimated as sent,
//! and only an estimate that comes out as `0` is treated as unusable.

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::data::{USER_AGENT, VacancySource, collect_pages, get_json, search_text};
use crate::domain::{EstimatedSalary, SjQuery, SourceKind};
use crate::error::AppError;

const BASE_URL: &str = "https://api.superjob.ru/2.0/vacancies/";
const API_KEY_VAR: &str = "SUPERJOB_API_KEY";

pub struct SjClient {
    client: Client,
    api_key: String,
    query: SjQuery,
    max_pages: Option<u32>,
    title: String,
}

impl SjClient {
    pub fn from_env(query: SjQuery, max_pages: Option<u32>, region_label: &str) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| AppError::config(format!("Missing {API_KEY_VAR} in environment (.env).")))?;
        Self::new(api_key, query, max_pages, region_label)
    }

    pub fn new(
        api_key: String,
        query: SjQuery,
        max_pages: Option<u32>,
        region_label: &str,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::remote(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_key,
            query,
            max_pages,
            title: format!("{} {region_label}", SourceKind::Sj.display_name()),
        })
    }

    fn fetch_page(&self, language: &str, page: u32) -> Result<VacanciesPage, AppError> {
        let req = self
            .client
            .get(BASE_URL)
            .header("X-Api-App-Id", self.api_key.as_str())
            .query(&[
                ("keyword", search_text(language)),
                ("town", self.query.town.clone()),
                ("catalogues", self.query.catalogue.to_string()),
                ("count", self.query.per_page.to_string()),
                ("page", page.to_string()),
                ("not_archive", "1".to_string()),
            ]);
        get_json(req, "SuperJob")
    }
}

impl VacancySource for SjClient {
    fn title(&self) -> &str {
        &self.title
    }

    fn fetch_salaries(&self, language: &str) -> Result<Vec<Value>, AppError> {
        collect_pages(self.max_pages, |page| {
            let body = self.fetch_page(language, page)?;
            tracing::debug!(language, page, total = body.total, objects = body.objects.len(), "sj page");
            Ok(body.into_salaries())
        })
    }

    fn finalize_estimate(&self, estimate: EstimatedSalary) -> EstimatedSalary {
        zero_as_unusable(estimate)
    }
}

#[derive(Debug, Deserialize)]
struct VacanciesPage {
    objects: Vec<Vacancy>,
    #[serde(default)]
    total: u64,
    #[serde(default)]
    more: bool,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    #[serde(default)]
    payment_from: Value,
    #[serde(default)]
    payment_to: Value,
    #[serde(default)]
    currency: Value,
}

impl VacanciesPage {
    fn into_salaries(self) -> (Vec<Value>, bool) {
        let salaries = self.objects.into_iter().map(Vacancy::into_salary).collect();
        (salaries, self.more)
    }
}

impl Vacancy {
    /// Reshape into the `{from, to, currency}` record the estimator reads.
    fn into_salary(self) -> Value {
        let mut record = Map::new();
        record.insert("from".to_string(), self.payment_from);
        record.insert("to".to_string(), self.payment_to);
        record.insert("currency".to_string(), self.currency);
        Value::Object(record)
    }
}

fn zero_as_unusable(estimate: EstimatedSalary) -> EstimatedSalary {
    match estimate {
        EstimatedSalary::Value(0) => EstimatedSalary::Unusable,
        other => other,
    }
}
