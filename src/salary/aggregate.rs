//! Per-language reduction of salary samples.

use std::collections::HashMap;

use crate::domain::{AverageSalary, EstimatedSalary, LanguageSample, LanguageStatistics};

/// Group samples by language and reduce each group to found/processed/average.
///
/// Every language present in `samples` gets exactly one entry; absent languages
/// never appear. The average is an integer floor over usable estimates only.
pub fn aggregate<I>(samples: I) -> HashMap<String, LanguageStatistics>
where
    I: IntoIterator<Item = LanguageSample>,
{
    let mut groups: HashMap<String, Vec<EstimatedSalary>> = HashMap::new();
    for sample in samples {
        groups.entry(sample.language).or_default().push(sample.estimate);
    }

    groups
        .into_iter()
        .map(|(language, estimates)| (language, reduce_group(&estimates)))
        .collect()
}

fn reduce_group(estimates: &[EstimatedSalary]) -> LanguageStatistics {
    let mut processed = 0usize;
    let mut sum: u128 = 0;
    for value in estimates.iter().filter_map(|e| e.value()) {
        processed += 1;
        sum += value as u128;
    }

    let average_salary = if processed == 0 {
        AverageSalary::NoData
    } else {
        // Mean of u64 values always fits back into u64.
        AverageSalary::Amount((sum / processed as u128) as u64)
    };

    LanguageStatistics {
        vacancies_found: estimates.len(),
        vacancies_processed: processed,
        average_salary,
    }
}
