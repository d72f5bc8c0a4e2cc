//! Column label normalization.
//!
//! The source file ships labels such as `"   name"`, `"r0le"` and
//! `"imdb sc0re"`. Every label is rewritten to trimmed, lower-case
//! snake_case with the digit `0` corrected to the letter `o`.

use crate::parser::RawTable;
use tracing::debug;

/// Normalizes a single column label.
pub fn normalize_label(label: &str) -> String {
    label
        .trim()
        .chars()
        .map(|c| match c {
            '0' => 'o',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .flat_map(char::to_lowercase)
        .collect()
}

/// Rewrites every column label of `table`. Rows are untouched.
pub fn normalize_columns(mut table: RawTable) -> RawTable {
    table.columns = table
        .columns
        .iter()
        .map(|label| {
            let normalized = normalize_label(label);
            if normalized != *label {
                debug!(from = %label, to = %normalized, "Renamed column");
            }
            normalized
        })
        .collect();
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE_LABELS: &[&str] = &[
        "   name",
        "Character",
        "r0le",
        "TITLE",
        "  Type",
        "release Year",
        "genres",
        "imdb sc0re",
        "imdb v0tes",
    ];

    #[test]
    fn test_source_labels() {
        let normalized: Vec<String> = SOURCE_LABELS.iter().map(|l| normalize_label(l)).collect();
        assert_eq!(
            normalized,
            vec![
                "name",
                "character",
                "role",
                "title",
                "type",
                "release_year",
                "genres",
                "imdb_score",
                "imdb_votes",
            ]
        );
    }

    #[test]
    fn test_normalized_labels_are_clean() {
        for label in SOURCE_LABELS.iter().chain(&["\tRelease\tYear ", "S0ME  C0L"]) {
            let n = normalize_label(label);
            assert_eq!(n, n.to_lowercase(), "{n}");
            assert!(!n.chars().any(char::is_whitespace), "{n}");
            assert!(!n.contains('0'), "{n}");
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for label in SOURCE_LABELS {
            let once = normalize_label(label);
            assert_eq!(normalize_label(&once), once);
        }
    }

    #[test]
    fn test_other_digits_untouched() {
        assert_eq!(normalize_label("Top 10 List"), "top_1o_list");
        assert_eq!(normalize_label("score2"), "score2");
    }

    #[test]
    fn test_normalize_columns_keeps_rows() {
        let table = crate::parser::parse_table(b" IMDB V0tes ,TITLE\n100,X\n").unwrap();
        let table = normalize_columns(table);
        assert_eq!(table.columns, vec!["imdb_votes", "title"]);
        assert_eq!(&table.rows[0][0], "100");
    }
}
