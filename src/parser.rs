//! Delimited-text parser for the movies and shows table.

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};

/// An untyped table: column labels as they appear in the file plus the rows.
///
/// Field values are trimmed on read; labels are left untouched so the
/// schema normalizer sees them exactly as written.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<StringRecord>,
}

impl RawTable {
    /// Index of the column labelled `name`, if any.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Labels as a csv header record, for deserializing rows by name.
    pub fn header_record(&self) -> StringRecord {
        StringRecord::from(self.columns.clone())
    }
}

/// Parses comma-delimited bytes into a [`RawTable`].
///
/// # Errors
///
/// Returns an error if the header is missing or any row has a different
/// number of fields than the header.
pub fn parse_table(bytes: &[u8]) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b',')
        .trim(Trim::Fields)
        .from_reader(bytes);

    let columns: Vec<String> = reader
        .headers()
        .context("failed to read table header")?
        .iter()
        .map(str::to_string)
        .collect();

    if columns.is_empty() {
        anyhow::bail!("table has no columns");
    }

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        // header is line 1
        let row = result.with_context(|| format!("malformed row at line {}", index + 2))?;
        rows.push(row);
    }

    Ok(RawTable { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_raw_labels() {
        let table = parse_table(b"   name,imdb sc0re\nA,7.5\n").unwrap();
        assert_eq!(table.columns, vec!["   name", "imdb sc0re"]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_parse_trims_field_values() {
        let table = parse_table(b"type\n  tv show  \n").unwrap();
        assert_eq!(&table.rows[0][0], "tv show");
    }

    #[test]
    fn test_parse_empty_bytes_is_an_error() {
        assert!(parse_table(&[]).is_err());
    }

    #[test]
    fn test_parse_ragged_row_is_an_error() {
        let err = parse_table(b"a,b\n1,2\n3\n").unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_quoted_fields_with_commas() {
        let table = parse_table(b"genres,year\n\"['drama', 'crime']\",2005\n").unwrap();
        assert_eq!(&table.rows[0][0], "['drama', 'crime']");
        assert_eq!(table.column_index("year"), Some(1));
    }
}
