//! ASCII table rendering for per-language statistics.
//!
//! Layout:
//!
//! ```text
//! +HeadHunter Moscow---+-----------------+---------------------+----------------+
//! | Language           | Vacancies found | Vacancies processed | Average salary |
//! +--------------------+-----------------+---------------------+----------------+
//! | Go                 |              42 |                  17 |         210000 |
//! +--------------------+-----------------+---------------------+----------------+
//! ```
//!
//! The title sits in the top border and is dropped when it does not fit.

use std::collections::HashMap;

use crate::domain::LanguageStatistics;

const HEADERS: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

const ALIGN: [Align; 4] = [Align::Left, Align::Right, Align::Right, Align::Right];

/// Render one source's statistics as a bordered table, rows sorted by language name.
pub fn format_statistics_table(title: &str, statistics: &HashMap<String, LanguageStatistics>) -> String {
    let mut languages: Vec<&String> = statistics.keys().collect();
    languages.sort();

    let rows: Vec<[String; 4]> = languages
        .into_iter()
        .map(|language| {
            let s = &statistics[language];
            [
                language.clone(),
                s.vacancies_found.to_string(),
                s.vacancies_processed.to_string(),
                s.average_salary.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(char_len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(char_len(cell));
        }
    }

    let separator = border_line(&widths);
    let mut out = String::new();
    out.push_str(&titled_border(&separator, title));
    out.push('\n');
    out.push_str(&format_row(&HEADERS.map(str::to_string), &widths, &[Align::Left; 4]));
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row, &widths, &ALIGN));
        out.push('\n');
    }
    if !rows.is_empty() {
        out.push_str(&separator);
        out.push('\n');
    }

    out
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line
}

fn titled_border(border: &str, title: &str) -> String {
    let border_len = char_len(border);
    let title_len = char_len(title);
    if title.is_empty() || title_len + 2 > border_len {
        return border.to_string();
    }
    let mut out = String::from("+");
    out.push_str(title);
    out.extend(border.chars().skip(1 + title_len));
    out
}

fn format_row(cells: &[String; 4], widths: &[usize; 4], align: &[Align; 4]) -> String {
    let mut line = String::from("|");
    for ((cell, w), a) in cells.iter().zip(widths).zip(align) {
        let pad = " ".repeat(w - char_len(cell));
        line.push(' ');
        match a {
            Align::Left => {
                line.push_str(cell);
                line.push_str(&pad);
            }
            Align::Right => {
                line.push_str(&pad);
                line.push_str(cell);
            }
        }
        line.push_str(" |");
    }
    line
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AverageSalary;

    fn stats(found: usize, processed: usize, average: AverageSalary) -> LanguageStatistics {
        LanguageStatistics {
            vacancies_found: found,
            vacancies_processed: processed,
            average_salary: average,
        }
    }

    #[test]
    fn renders_sorted_rows_with_title() {
        let mut map = HashMap::new();
        map.insert("Ruby".to_string(), stats(3, 0, AverageSalary::NoData));
        map.insert("Go".to_string(), stats(12, 5, AverageSalary::Amount(210_000)));

        let table = format_statistics_table("HeadHunter Moscow", &map);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("+HeadHunter Moscow-"));
        assert!(lines[1].starts_with("| Language "));
        assert!(lines[3].starts_with("| Go "));
        assert!(lines[3].ends_with(" 210000 |"));
        assert!(lines[4].starts_with("| Ruby "));
        assert!(lines[4].contains("No Data"));

        let width = lines[2].chars().count();
        for line in &lines {
            assert_eq!(line.chars().count(), width, "{line}");
        }
    }

    #[test]
    fn cyrillic_cells_stay_aligned() {
        let mut map = HashMap::new();
        map.insert("1С".to_string(), stats(1, 1, AverageSalary::Amount(1)));
        let table = format_statistics_table("SuperJob Москва", &map);
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
        assert!(table.starts_with("+SuperJob Москва-"));
    }

    #[test]
    fn long_title_is_dropped() {
        let border = border_line(&[1, 1]);
        assert_eq!(titled_border(&border, "a title far too long"), border);
    }

    #[test]
    fn empty_statistics_render_header_only() {
        let table = format_statistics_table("Empty", &HashMap::new());
        assert_eq!(table.lines().count(), 3);
    }
}
