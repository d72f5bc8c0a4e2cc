use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// First release year of the "Golden Age" of television (The Sopranos).
pub const GOLDEN_AGE_START: i32 = 1999;

/// Buckets outside this range have too few titles to be meaningful.
pub const MIN_BUCKET: i64 = 4;
pub const MAX_BUCKET: i64 = 9;

/// Analysis parameters.
///
/// Stored as a JSON object on disk; every field is optional:
/// ```json
/// {
///   "golden_age_start": 1999,
///   "min_bucket": 4,
///   "max_bucket": 9,
///   "strict_media_types": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub golden_age_start: i32,
    pub min_bucket: i64,
    pub max_bucket: i64,
    /// Fail on media type values that are neither a movie nor a show spelling.
    pub strict_media_types: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            golden_age_start: GOLDEN_AGE_START,
            min_bucket: MIN_BUCKET,
            max_bucket: MAX_BUCKET,
            strict_media_types: false,
        }
    }
}

impl AnalysisConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("failed to read config {path}"))?;
        let config: AnalysisConfig =
            serde_json::from_str(&content).with_context(|| format!("invalid config {path}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the bucket window lies within the 1-10 score scale.
    pub fn validate(&self) -> Result<()> {
        if !(1..=10).contains(&self.min_bucket) || !(1..=10).contains(&self.max_bucket) {
            anyhow::bail!(
                "bucket range {}..={} must lie within 1..=10",
                self.min_bucket,
                self.max_bucket
            );
        }
        if self.min_bucket > self.max_bucket {
            anyhow::bail!(
                "min_bucket {} is greater than max_bucket {}",
                self.min_bucket,
                self.max_bucket
            );
        }
        Ok(())
    }
}
