//! Record cleaning: missing ratings, exact duplicates, and media type
//! spellings, applied in that order.

pub mod duplicates;
pub mod media_type;
pub mod missing;

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

use crate::cleaning::duplicates::drop_duplicates;
use crate::cleaning::media_type::canonicalize_media_types;
use crate::cleaning::missing::drop_missing_ratings;
use crate::record::Record;

/// What the cleaner removed or rewrote.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    pub input_rows: usize,
    pub missing_removed: usize,
    pub duplicates_removed: usize,
    pub canonicalized: usize,
    pub unrecognized_types: BTreeMap<String, usize>,
    pub output_rows: usize,
}

/// Runs the three cleaning steps over `records`.
///
/// # Errors
///
/// Only fails when `strict_media_types` is set and an unrecognized media
/// type value is present.
#[tracing::instrument(skip(records), fields(input_rows = records.len()))]
pub fn clean(records: Vec<Record>, strict_media_types: bool) -> Result<(Vec<Record>, CleaningReport)> {
    let input_rows = records.len();

    let (records, missing_removed) = drop_missing_ratings(records);
    info!(removed = missing_removed, remaining = records.len(), "Dropped rows with missing ratings");

    let (records, duplicates_removed) = drop_duplicates(records);
    info!(removed = duplicates_removed, remaining = records.len(), "Dropped duplicate rows");

    let (records, summary) = canonicalize_media_types(records, strict_media_types)?;
    info!(
        canonicalized = summary.canonicalized,
        unrecognized = summary.unrecognized.len(),
        "Canonicalized media types"
    );

    // spellings that collapsed to the same label can leave new duplicates
    let (records, respelled_duplicates) = drop_duplicates(records);
    if respelled_duplicates > 0 {
        info!(removed = respelled_duplicates, remaining = records.len(), "Dropped duplicates after canonicalization");
    }
    let duplicates_removed = duplicates_removed + respelled_duplicates;

    let report = CleaningReport {
        input_rows,
        missing_removed,
        duplicates_removed,
        canonicalized: summary.canonicalized,
        unrecognized_types: summary.unrecognized,
        output_rows: records.len(),
    };

    Ok((records, report))
}
