//! Command-line parsing for the salary statistics tool.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! fetching and aggregation code; `app` turns parsed args into a `RunConfig`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{DEFAULT_CURRENCIES, DEFAULT_LANGUAGES};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "salary",
    version,
    about = "Average programmer salaries per language from HeadHunter and SuperJob"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands: which job board(s) to query.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// HeadHunter only.
    Hh(StatsArgs),
    /// SuperJob only (needs SUPERJOB_API_KEY).
    Sj(StatsArgs),
    /// Both boards, one table each.
    All(StatsArgs),
}

/// Options shared by every subcommand.
#[derive(Debug, Args, Clone)]
pub struct StatsArgs {
    /// Programming languages to query (comma-separated or repeated).
    #[arg(short = 'l', long = "language", value_delimiter = ',', default_values_t = DEFAULT_LANGUAGES.map(String::from))]
    pub languages: Vec<String>,

    /// Currency codes treated as the target currency (case-insensitive).
    #[arg(long = "currency", value_delimiter = ',', default_values_t = DEFAULT_CURRENCIES.map(String::from))]
    pub currencies: Vec<String>,

    /// Weight applied when a listing only states the upper bound.
    #[arg(long, default_value_t = 0.8)]
    pub factor_top: f64,

    /// Weight applied when a listing only states the lower bound.
    #[arg(long, default_value_t = 1.2)]
    pub factor_bottom: f64,

    /// Region name used in table titles.
    #[arg(long, default_value = "Moscow")]
    pub region: String,

    /// HeadHunter area id (1 = Moscow).
    #[arg(long, default_value_t = 1)]
    pub area: u32,

    /// HeadHunter search period in days.
    #[arg(long, default_value_t = 30)]
    pub period: u32,

    /// SuperJob town name.
    #[arg(long, default_value = "Москва")]
    pub town: String,

    /// SuperJob catalogue id (48 = development, programming).
    #[arg(long, default_value_t = 48)]
    pub catalogue: u32,

    /// Listings requested per page.
    #[arg(long, default_value_t = 100)]
    pub per_page: u32,

    /// Stop after this many pages per language.
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// Export statistics to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cli = Cli::parse_from(["salary", "hh"]);
        let Command::Hh(args) = cli.command else {
            panic!("expected hh");
        };
        assert_eq!(args.languages.len(), 10);
        assert_eq!(args.languages[0], "Java");
        assert_eq!(args.currencies, vec!["RUR".to_string(), "rub".to_string()]);
        assert_eq!(args.factor_top, 0.8);
        assert_eq!(args.factor_bottom, 1.2);
        assert_eq!(args.area, 1);
        assert_eq!(args.period, 30);
        assert_eq!(args.catalogue, 48);
        assert!(args.max_pages.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn languages_accept_commas_and_repeats() {
        let cli = Cli::parse_from(["salary", "sj", "-l", "Go,Rust", "--language", "C#", "-vv"]);
        let Command::Sj(args) = cli.command else {
            panic!("expected sj");
        };
        assert_eq!(args.languages, vec!["Go", "Rust", "C#"]);
        assert_eq!(cli.verbose, 2);
    }
}
