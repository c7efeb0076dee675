//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - resolves a `RunConfig`
//! - runs the statistics pipeline per job board
//! - prints one table per board and writes the optional CSV export

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, StatsArgs};
use crate::domain::{EstimatorConfig, Factor, HhQuery, RunConfig, SjQuery, SourceKind};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `salary` binary.
pub fn run() -> Result<(), AppError> {
    // `salary` and `salary -l Go` behave like `salary all ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    init_logging(cli.verbose);

    let (sources, args) = match cli.command {
        Command::Hh(args) => (vec![SourceKind::Hh], args),
        Command::Sj(args) => (vec![SourceKind::Sj], args),
        Command::All(args) => (vec![SourceKind::Hh, SourceKind::Sj], args),
    };
    let config = run_config_from_args(&args, sources)?;
    tracing::debug!(?config, "resolved configuration");

    let reports = pipeline::run_all(&config)?;
    for report in &reports {
        println!(
            "{}",
            crate::report::format_statistics_table(&report.title, &report.statistics)
        );
    }

    if let Some(path) = &config.export {
        crate::io::write_statistics_csv(path, &reports)?;
        tracing::info!(path = %path.display(), "statistics exported");
    }

    Ok(())
}

/// Log to stderr so stdout carries only the tables. `RUST_LOG` overrides `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();
}

pub fn run_config_from_args(args: &StatsArgs, sources: Vec<SourceKind>) -> Result<RunConfig, AppError> {
    if args.languages.iter().all(|l| l.trim().is_empty()) {
        return Err(AppError::config("At least one language is required."));
    }
    if args.per_page == 0 {
        return Err(AppError::config("--per-page must be > 0."));
    }

    let estimator = EstimatorConfig {
        accepted_currencies: args.currencies.clone(),
        factor_top: Factor::new(args.factor_top)?,
        factor_bottom: Factor::new(args.factor_bottom)?,
    };

    Ok(RunConfig {
        sources,
        languages: args
            .languages
            .iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect(),
        estimator,
        hh: HhQuery {
            area: args.area,
            period_days: args.period,
            per_page: args.per_page,
        },
        sj: SjQuery {
            town: args.town.clone(),
            catalogue: args.catalogue,
            per_page: args.per_page,
        },
        region_label: args.region.clone(),
        max_pages: args.max_pages,
        export: args.export.clone(),
    })
}

/// Rewrite argv so `salary` defaults to `salary all`.
///
/// Rules:
/// - `salary`                       -> `salary all`
/// - `salary -l Go ...`             -> `salary all -l Go ...`
/// - `salary --help/--version/-h`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("all".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "hh" | "sj" | "all");
    if is_subcommand {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "all".to_string());
        return argv;
    }

    argv
}
