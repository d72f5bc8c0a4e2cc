use anyhow::Result;
use chrono::Utc;
use std::path::Path;
use tracing::info;

use crate::analyzers::aggregate::aggregate;
use crate::analyzers::types::AnalysisReport;
use crate::cleaning::clean;
use crate::config::AnalysisConfig;
use crate::input::read_input;
use crate::overview::{TableOverview, summarize};
use crate::parser::{RawTable, parse_table};
use crate::record::Record;
use crate::schema::normalize_columns;

/// Reads, parses and normalizes the labels of the table at `path`.
pub fn load_table(path: &Path) -> Result<RawTable> {
    let bytes = read_input(path)?;
    let table = normalize_columns(parse_table(&bytes)?);
    info!(
        rows = table.rows.len(),
        columns = table.columns.len(),
        "Table loaded"
    );
    Ok(table)
}

/// Runs the whole pipeline over the table at `path`.
///
/// Any load or parse failure aborts before cleaning starts.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn analyze(path: &Path, config: &AnalysisConfig) -> Result<AnalysisReport> {
    config.validate()?;

    let table = load_table(path)?;
    let records = Record::from_table(&table)?;
    let rows_loaded = records.len();

    let (records, cleaning) = clean(records, config.strict_media_types)?;
    let aggregation = aggregate(records, config);

    info!(buckets = aggregation.results.len(), "Analysis complete");

    Ok(AnalysisReport {
        generated_at: Utc::now(),
        source: path.display().to_string(),
        golden_age_start: config.golden_age_start,
        rows_loaded,
        cleaning,
        bucket_counts: aggregation.bucket_counts,
        results: aggregation.results,
    })
}

/// Loads the table at `path` and summarizes it without cleaning.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn overview(path: &Path) -> Result<TableOverview> {
    let table = load_table(path)?;
    Ok(summarize(&table))
}
