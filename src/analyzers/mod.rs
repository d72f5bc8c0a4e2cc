//! Golden Age show analysis.
//!
//! This module filters cleaned records to shows released since 1999,
//! buckets them by rounded IMDb score, and averages the vote counts of
//! each bucket.

pub mod aggregate;
pub mod analyzer;
pub mod types;
pub mod utility;
