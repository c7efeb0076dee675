//! HeadHunter (`api.hh.ru`) vacancy search.

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::data::{USER_AGENT, VacancySource, collect_pages, get_json, search_text};
use crate::domain::{HhQuery, SourceKind};
use crate::error::AppError;

const BASE_URL: &str = "https://api.hh.ru/vacancies";

pub struct HhClient {
    client: Client,
    query: HhQuery,
    max_pages: Option<u32>,
    title: String,
}

impl HhClient {
    pub fn new(query: HhQuery, max_pages: Option<u32>, region_label: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::remote(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            query,
            max_pages,
            title: format!("{} {region_label}", SourceKind::Hh.display_name()),
        })
    }

    fn fetch_page(&self, language: &str, page: u32) -> Result<VacanciesPage, AppError> {
        let req = self.client.get(BASE_URL).query(&[
            ("text", search_text(language)),
            ("area", self.query.area.to_string()),
            ("period", self.query.period_days.to_string()),
            ("per_page", self.query.per_page.to_string()),
            ("page", page.to_string()),
        ]);
        get_json(req, "HeadHunter")
    }
}

impl VacancySource for HhClient {
    fn title(&self) -> &str {
        &self.title
    }

    fn fetch_salaries(&self, language: &str) -> Result<Vec<Value>, AppError> {
        collect_pages(self.max_pages, |page| {
            let body = self.fetch_page(language, page)?;
            tracing::debug!(language, page, pages = body.pages, items = body.items.len(), "hh page");
            Ok(body.into_salaries(page))
        })
    }
}

#[derive(Debug, Deserialize)]
struct VacanciesPage {
    items: Vec<Vacancy>,
    #[serde(default)]
    pages: u32,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    #[serde(default)]
    salary: Value,
}

impl VacanciesPage {
    /// Salary records of this page and whether a page after `page` exists.
    fn into_salaries(self, page: u32) -> (Vec<Value>, bool) {
        let has_more = page + 1 < self.pages;
        (self.items.into_iter().map(|v| v.salary).collect(), has_more)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_page_and_missing_salaries() {
        let body = r#"{
            "items": [
                {"id": "1", "salary": {"from": 100000, "to": 120000, "currency": "RUR", "gross": false}},
                {"id": "2", "salary": null},
                {"id": "3"}
            ],
            "found": 3,
            "pages": 2,
            "page": 0
        }"#;
        let page: VacanciesPage = serde_json::from_str(body).unwrap();
        let (salaries, has_more) = page.into_salaries(0);
        assert!(has_more);
        assert_eq!(salaries.len(), 3);
        assert_eq!(salaries[0]["to"], json!(120000));
        assert!(salaries[1].is_null());
        assert!(salaries[2].is_null());
    }

    #[test]
    fn last_page_has_no_more() {
        let page: VacanciesPage = serde_json::from_str(r#"{"items": [], "pages": 2}"#).unwrap();
        assert!(!page.into_salaries(1).1);

        let empty: VacanciesPage = serde_json::from_str(r#"{"items": [], "pages": 0}"#).unwrap();
        assert!(!empty.into_salaries(0).1);
    }
}
