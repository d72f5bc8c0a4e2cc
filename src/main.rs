//! CLI entry point for the Golden Age ratings analysis.
//!
//! Provides subcommands for inspecting the raw movies and shows table and
//! for running the cleaning and aggregation pipeline over it.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use golden_age_ratings::analyzers::analyzer::{analyze, overview};
use golden_age_ratings::config::AnalysisConfig;
use golden_age_ratings::output::{print_pretty, write_json, write_overview, write_table};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "golden_age_ratings")]
#[command(
    about = "Do highly rated Golden Age TV shows get the most votes?",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean the table and print mean votes per rounded IMDb score
    Analyze {
        /// Path to the movies and shows CSV (optionally .gz)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// JSON file with analysis parameters
        #[arg(short, long)]
        config: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,

        /// Fail on unrecognized media type values
        #[arg(long, default_value_t = false)]
        strict: bool,

        /// Override the first Golden Age release year
        #[arg(long)]
        since: Option<i32>,
    },
    /// Print row counts, nulls, duplicates and type values of the raw table
    Overview {
        /// Path to the movies and shows CSV (optionally .gz)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/golden_age_ratings.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("golden_age_ratings.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Analyze {
            input,
            config,
            format,
            strict,
            since,
        } => {
            let mut config = match config {
                Some(path) => AnalysisConfig::load(&path)?,
                None => AnalysisConfig::default(),
            };
            if strict {
                config.strict_media_types = true;
            }
            if let Some(year) = since {
                config.golden_age_start = year;
            }

            let report = analyze(&input, &config)?;
            print_pretty(&report);

            match format {
                Format::Table => write_table(&mut stdout, &report.results)?,
                Format::Json => write_json(&mut stdout, &report)?,
            }
        }
        Commands::Overview { input } => {
            let summary = overview(&input)?;
            info!(rows = summary.rows, "Overview computed");
            write_overview(&mut stdout, &summary)?;
        }
    }

    Ok(())
}
