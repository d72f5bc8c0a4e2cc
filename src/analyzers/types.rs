//! Data types produced by the aggregation pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::cleaning::CleaningReport;

/// Mean vote count of the shows whose rounded score is `bucket`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BucketVotes {
    pub bucket: i64,
    pub mean_votes: i64,
}

/// Output of the aggregator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Aggregation {
    /// Golden Age shows per bucket, before the bucket range is applied.
    pub bucket_counts: BTreeMap<i64, usize>,
    /// Sorted by `mean_votes` descending.
    pub results: Vec<BucketVotes>,
}

/// Complete result of one run, printed as a table or as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub golden_age_start: i32,
    pub rows_loaded: usize,
    pub cleaning: CleaningReport,
    pub bucket_counts: BTreeMap<i64, usize>,
    pub results: Vec<BucketVotes>,
}
