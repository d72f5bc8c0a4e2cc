//! Canonicalization of the `type` column.
//!
//! The source data spells the two categories many ways ("tv show",
//! "SHOWS", "the movie", ...). Known spellings are declared here; anything
//! else is reported as [`MediaType::Unrecognized`] rather than guessed.

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

use crate::record::Record;

pub const MOVIE: &str = "MOVIE";
pub const SHOW: &str = "SHOW";

/// Spellings of "show", compared after [`match_key`].
static SHOW_SPELLINGS: &[&str] = &[
    "show",
    "shows",
    "the show",
    "tv",
    "tv show",
    "tv shows",
    "tv series",
    "series",
];

/// Spellings of "movie", compared after [`match_key`].
static MOVIE_SPELLINGS: &[&str] = &["movie", "movies", "the movie", "film", "films"];

/// Classification of a raw `type` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MediaType {
    Movie,
    Show,
    Unrecognized(String),
}

impl MediaType {
    pub fn classify(raw: &str) -> Self {
        let key = match_key(raw);
        if SHOW_SPELLINGS.contains(&key.as_str()) {
            MediaType::Show
        } else if MOVIE_SPELLINGS.contains(&key.as_str()) {
            MediaType::Movie
        } else {
            MediaType::Unrecognized(raw.to_string())
        }
    }

    /// Canonical label; unrecognized values keep their original spelling.
    pub fn label(&self) -> &str {
        match self {
            MediaType::Movie => MOVIE,
            MediaType::Show => SHOW,
            MediaType::Unrecognized(raw) => raw,
        }
    }
}

/// Lower-cases and collapses whitespace so "  TV   Shows" matches "tv shows".
fn match_key(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Outcome of canonicalizing a batch of records.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MediaTypeSummary {
    /// Records whose value was rewritten.
    pub canonicalized: usize,
    /// Unrecognized raw values and how many records carried each.
    pub unrecognized: BTreeMap<String, usize>,
}

/// Rewrites every known spelling to `"MOVIE"` or `"SHOW"`.
///
/// Movie spellings are rewritten too ("the movie" becomes `"MOVIE"`), but a
/// movie value never becomes `"SHOW"`.
///
/// Unrecognized values pass through unchanged and are counted in the
/// summary. With `strict` they abort instead.
pub fn canonicalize_media_types(
    records: Vec<Record>,
    strict: bool,
) -> Result<(Vec<Record>, MediaTypeSummary)> {
    let mut summary = MediaTypeSummary::default();
    let mut out = Vec::with_capacity(records.len());

    for mut record in records {
        match MediaType::classify(&record.media_type) {
            MediaType::Unrecognized(raw) => {
                *summary.unrecognized.entry(raw).or_default() += 1;
            }
            known => {
                if record.media_type != known.label() {
                    record.media_type = known.label().to_string();
                    summary.canonicalized += 1;
                }
            }
        }
        out.push(record);
    }

    if !summary.unrecognized.is_empty() {
        let values: Vec<&str> = summary.unrecognized.keys().map(String::as_str).collect();
        if strict {
            anyhow::bail!("unrecognized media type values: {}", values.join(", "));
        }
        warn!(?values, "Media type values left uncanonicalized");
    }

    Ok((out, summary))
}
