//! Shared "statistics pipeline" used by every subcommand.
//!
//! fetch (per language, all pages) -> estimate each listing -> collect all samples -> aggregate
//!
//! Aggregation only starts once every page of every language has been fetched.

use std::collections::HashMap;

use crate::data::{HhClient, SjClient, VacancySource};
use crate::domain::{EstimatorConfig, LanguageSample, LanguageStatistics, RunConfig, SourceKind};
use crate::error::AppError;
use crate::salary::{aggregate, estimate_json};

/// Statistics computed for one job board.
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub source: SourceKind,
    pub title: String,
    pub statistics: HashMap<String, LanguageStatistics>,
}

/// Fetch and estimate every listing for `languages` from one source.
pub fn collect_samples(
    source: &dyn VacancySource,
    languages: &[String],
    estimator: &EstimatorConfig,
) -> Result<Vec<LanguageSample>, AppError> {
    let mut samples = Vec::new();
    for language in languages {
        let salaries = source.fetch_salaries(language)?;
        tracing::info!(source = source.title(), %language, listings = salaries.len(), "fetched");
        samples.extend(
            salaries
                .iter()
                .map(|salary| source.finalize_estimate(estimate_json(salary, estimator)))
                .map(|estimate| LanguageSample::new(language.as_str(), estimate)),
        );
    }
    Ok(samples)
}

/// Run the full pipeline against an already constructed source.
pub fn run_source(
    kind: SourceKind,
    source: &dyn VacancySource,
    config: &RunConfig,
) -> Result<SourceReport, AppError> {
    let languages = config.normalized_languages();
    let samples = collect_samples(source, &languages, &config.estimator)?;
    Ok(SourceReport {
        source: kind,
        title: source.title().to_string(),
        statistics: aggregate(samples),
    })
}

/// Construct the HTTP client for `kind` from the run configuration.
pub fn build_source(kind: SourceKind, config: &RunConfig) -> Result<Box<dyn VacancySource>, AppError> {
    let source: Box<dyn VacancySource> = match kind {
        SourceKind::Hh => Box::new(HhClient::new(config.hh.clone(), config.max_pages, &config.region_label)?),
        SourceKind::Sj => Box::new(SjClient::from_env(
            config.sj.clone(),
            config.max_pages,
            &config.region_label,
        )?),
    };
    Ok(source)
}

/// Query every configured source in order.
pub fn run_all(config: &RunConfig) -> Result<Vec<SourceReport>, AppError> {
    let mut reports = Vec::with_capacity(config.sources.len());
    for &kind in &config.sources {
        let source = build_source(kind, config)?;
        reports.push(run_source(kind, source.as_ref(), config)?);
    }
    Ok(reports)
}
