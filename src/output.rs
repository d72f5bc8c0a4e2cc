//! Output formatting for analysis results.
//!
//! Supports a plain-text table, JSON, and the data overview listing.

use anyhow::Result;
use std::io::Write;
use tracing::debug;

use crate::analyzers::types::{AnalysisReport, BucketVotes};
use crate::overview::TableOverview;

/// Logs the full report using Rust's debug pretty-print format.
pub fn print_pretty(report: &AnalysisReport) {
    debug!("{:#?}", report);
}

/// Writes the report as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, report: &AnalysisReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Writes the `(imdb score, mean votes)` rows in their given order.
pub fn write_table<W: Write>(out: &mut W, results: &[BucketVotes]) -> Result<()> {
    writeln!(out, "{:>10}  {:>12}", "imdb score", "mean votes")?;
    for row in results {
        writeln!(out, "{:>10}  {:>12}", row.bucket, row.mean_votes)?;
    }
    Ok(())
}

/// Writes the overview: shape, per-column nulls, duplicates and type values.
pub fn write_overview<W: Write>(out: &mut W, overview: &TableOverview) -> Result<()> {
    writeln!(
        out,
        "{} rows, {} columns",
        overview.rows,
        overview.columns.len()
    )?;
    writeln!(out, "{:<16} {:>10} {:>8}", "column", "non-null", "nulls")?;
    for column in &overview.columns {
        writeln!(
            out,
            "{:<16} {:>10} {:>8}",
            column.name, column.non_null, column.nulls
        )?;
    }
    writeln!(
        out,
        "duplicate rows: {} ({} among rows with ratings)",
        overview.duplicate_rows, overview.duplicate_rows_with_ratings
    )?;
    writeln!(out, "type values: {}", overview.distinct_types.join(", "))?;
    Ok(())
}
