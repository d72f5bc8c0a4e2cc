use anyhow::{Context, Result};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::parser::RawTable;

/// Credit role of the person a row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Actor,
    Director,
}

impl FromStr for Role {
    type Err = anyhow::Error;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "actor" => Ok(Role::Actor),
            "director" => Ok(Role::Director),
            other => anyhow::bail!("unknown role {other:?}"),
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// One row of the movies and shows table, keyed by normalized column labels.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Record {
    pub name: String,
    pub character: Option<String>,
    pub role: Role,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub media_type: String,
    pub release_year: i32,
    pub genres: String,
    pub imdb_score: Option<f64>,
    pub imdb_votes: Option<f64>,
}

impl Record {
    /// Converts every row of a normalized table into a [`Record`].
    ///
    /// # Errors
    ///
    /// Fails on the first row missing a required column or holding a value
    /// of the wrong type (e.g. a non-numeric release year).
    pub fn from_table(table: &RawTable) -> Result<Vec<Record>> {
        let headers = table.header_record();
        table
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                row.deserialize::<Record>(Some(&headers))
                    .with_context(|| format!("invalid record at data row {}", index + 1))
            })
            .collect()
    }

    /// True when both the score and the vote count are present and numeric.
    pub fn has_ratings(&self) -> bool {
        self.imdb_score.is_some_and(|v| !v.is_nan()) && self.imdb_votes.is_some_and(|v| !v.is_nan())
    }

    /// Every field, with floats compared by bit pattern so equality is total.
    #[allow(clippy::type_complexity)]
    fn identity(
        &self,
    ) -> (
        &str,
        Option<&str>,
        Role,
        Option<&str>,
        &str,
        i32,
        &str,
        Option<u64>,
        Option<u64>,
    ) {
        (
            &self.name,
            self.character.as_deref(),
            self.role,
            self.title.as_deref(),
            &self.media_type,
            self.release_year,
            &self.genres,
            self.imdb_score.map(f64::to_bits),
            self.imdb_votes.map(f64::to_bits),
        )
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}
