//! First look at a freshly loaded table: shape, gaps and duplicates.

use csv::StringRecord;
use serde::Serialize;
use std::collections::HashSet;

use crate::parser::RawTable;

/// Null accounting for one column. Empty cells count as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub non_null: usize,
    pub nulls: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableOverview {
    pub rows: usize,
    pub columns: Vec<ColumnSummary>,
    /// Rows identical to an earlier row.
    pub duplicate_rows: usize,
    /// Same count restricted to rows with both `imdb_score` and `imdb_votes`
    /// filled, i.e. the duplicates the cleaner will actually see.
    pub duplicate_rows_with_ratings: usize,
    /// Distinct values of the `type` column in first-seen order.
    pub distinct_types: Vec<String>,
}

/// Summarizes `table`, which should already have normalized labels.
pub fn summarize(table: &RawTable) -> TableOverview {
    let columns = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let nulls = table
                .rows
                .iter()
                .filter(|row| row.get(i).is_none_or(str::is_empty))
                .count();
            ColumnSummary {
                name: name.clone(),
                non_null: table.rows.len() - nulls,
                nulls,
            }
        })
        .collect();

    let duplicate_rows = count_duplicates(table.rows.iter());

    let rating_columns = [table.column_index("imdb_score"), table.column_index("imdb_votes")];
    let duplicate_rows_with_ratings = match rating_columns {
        [Some(score), Some(votes)] => count_duplicates(table.rows.iter().filter(|row| {
            [score, votes]
                .iter()
                .all(|&i| row.get(i).is_some_and(|v| !v.is_empty()))
        })),
        _ => duplicate_rows,
    };

    let mut distinct_types: Vec<String> = Vec::new();
    if let Some(i) = table.column_index("type") {
        for value in table.rows.iter().filter_map(|row| row.get(i)) {
            if !distinct_types.iter().any(|t| t == value) {
                distinct_types.push(value.to_string());
            }
        }
    }

    TableOverview {
        rows: table.rows.len(),
        columns,
        duplicate_rows,
        duplicate_rows_with_ratings,
        distinct_types,
    }
}

fn count_duplicates<'a>(rows: impl Iterator<Item = &'a StringRecord>) -> usize {
    let mut seen: HashSet<Vec<&'a str>> = HashSet::new();
    let mut duplicates = 0;
    for row in rows {
        if !seen.insert(row.iter().collect()) {
            duplicates += 1;
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_table;
    use crate::schema::normalize_columns;

    #[test]
    fn test_summarize() {
        let table = normalize_columns(
            parse_table(
                b"  Type,imdb sc0re\n\
                  tv show,8.2\n\
                  MOVIE,\n\
                  tv show,8.2\n\
                  SHOW,7.1\n",
            )
            .unwrap(),
        );

        let overview = summarize(&table);

        assert_eq!(overview.rows, 4);
        assert_eq!(
            overview.columns[1],
            ColumnSummary {
                name: "imdb_score".to_string(),
                non_null: 3,
                nulls: 1
            }
        );
        assert_eq!(overview.duplicate_rows, 1);
        assert_eq!(overview.duplicate_rows_with_ratings, 1);
        assert_eq!(overview.distinct_types, vec!["tv show", "MOVIE", "SHOW"]);
    }

    #[test]
    fn test_duplicates_without_ratings_not_counted_after_drop() {
        let table = normalize_columns(
            parse_table(
                b"type,imdb_score,imdb_votes\n\
                  SHOW,,100\n\
                  SHOW,,100\n\
                  SHOW,7.0,100\n\
                  SHOW,7.0,100\n\
                  SHOW,7.0,100\n",
            )
            .unwrap(),
        );

        let overview = summarize(&table);
        assert_eq!(overview.duplicate_rows, 3);
        assert_eq!(overview.duplicate_rows_with_ratings, 2);
    }

    #[test]
    fn test_without_type_column() {
        let table = parse_table(b"a\n1\n").unwrap();
        let overview = summarize(&table);
        assert!(overview.distinct_types.is_empty());
        assert_eq!(overview.duplicate_rows, 0);
    }
}
