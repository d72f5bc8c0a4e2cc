use std::cmp::Reverse;
use std::collections::BTreeMap;
use tracing::debug;

use crate::analyzers::types::{Aggregation, BucketVotes};
use crate::analyzers::utility::{mean, round_to_int};
use crate::cleaning::media_type::SHOW;
use crate::config::AnalysisConfig;
use crate::record::Record;

/// Keeps shows released in or after `since`.
pub fn golden_age_shows(records: Vec<Record>, since: i32) -> Vec<Record> {
    records
        .into_iter()
        .filter(|r| r.release_year >= since)
        .filter(|r| r.media_type == SHOW)
        .collect()
}

/// Bucket of a record: its IMDb score rounded to the nearest integer.
pub fn bucket_of(record: &Record) -> Option<i64> {
    record.imdb_score.map(round_to_int)
}

/// Number of records in every bucket, including those the range filter drops.
pub fn bucket_counts(records: &[Record]) -> BTreeMap<i64, usize> {
    let mut counts = BTreeMap::new();
    for bucket in records.iter().filter_map(bucket_of) {
        *counts.entry(bucket).or_default() += 1;
    }
    counts
}

/// Mean vote count per bucket within `min..=max`, sorted by mean descending.
///
/// Buckets with no records are absent. Ties are ordered by bucket.
pub fn mean_votes_by_bucket(records: &[Record], min: i64, max: i64) -> Vec<BucketVotes> {
    let mut series: BTreeMap<i64, Vec<f64>> = BTreeMap::new();

    for record in records {
        let (Some(bucket), Some(votes)) = (bucket_of(record), record.imdb_votes) else {
            continue;
        };
        if !(min..=max).contains(&bucket) {
            continue;
        }
        series.entry(bucket).or_default().push(votes);
    }

    let mut results: Vec<BucketVotes> = series
        .into_iter()
        .map(|(bucket, votes)| BucketVotes {
            bucket,
            mean_votes: round_to_int(mean(&votes)),
        })
        .collect();

    results.sort_by_key(|r| (Reverse(r.mean_votes), r.bucket));
    results
}

/// Reduces cleaned records to the mean vote count per rounded score of
/// Golden Age shows.
#[tracing::instrument(skip(records, config), fields(input_rows = records.len()))]
pub fn aggregate(records: Vec<Record>, config: &AnalysisConfig) -> Aggregation {
    let shows = golden_age_shows(records, config.golden_age_start);
    debug!(shows = shows.len(), since = config.golden_age_start, "Filtered to Golden Age shows");

    let bucket_counts = bucket_counts(&shows);
    debug!(?bucket_counts, "Shows per bucket");

    let results = mean_votes_by_bucket(&shows, config.min_bucket, config.max_bucket);

    Aggregation {
        bucket_counts,
        results,
    }
}
