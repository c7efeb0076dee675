//! Export per-language statistics to CSV.
//!
//! One row per `(source, language)`, easy to load into a spreadsheet.
//! A language without usable salaries gets an empty `average_salary` cell.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::app::pipeline::SourceReport;
use crate::domain::SourceKind;
use crate::error::AppError;

#[derive(Debug, Serialize)]
struct StatisticsRow<'a> {
    source: SourceKind,
    language: &'a str,
    vacancies_found: usize,
    vacancies_processed: usize,
    average_salary: Option<u64>,
}

/// Write every report's statistics to a CSV file at `path`.
pub fn write_statistics_csv(path: &Path, reports: &[SourceReport]) -> Result<(), AppError> {
    let file = std::fs::File::create(path)
        .map_err(|e| AppError::config(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_statistics(file, reports)
}

fn write_statistics<W: Write>(out: W, reports: &[SourceReport]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(out);

    for report in reports {
        let mut languages: Vec<&String> = report.statistics.keys().collect();
        languages.sort();
        for language in languages {
            let s = &report.statistics[language];
            writer
                .serialize(StatisticsRow {
                    source: report.source,
                    language,
                    vacancies_found: s.vacancies_found,
                    vacancies_processed: s.vacancies_processed,
                    average_salary: s.average_salary.amount(),
                })
                .map_err(|e| AppError::config(format!("Failed to write export CSV row: {e}")))?;
        }
    }

    writer
        .flush()
        .map_err(|e| AppError::config(format!("Failed to flush export CSV: {e}")))
}
