use crate::record::Record;

/// Drops every record without both an IMDb score and a vote count.
///
/// Returns the surviving records and how many were removed. A null title is
/// kept.
pub fn drop_missing_ratings(records: Vec<Record>) -> (Vec<Record>, usize) {
    let before = records.len();
    let kept: Vec<Record> = records.into_iter().filter(Record::has_ratings).collect();
    let removed = before - kept.len();
    (kept, removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::tests::record;

    #[test]
    fn test_drops_null_score_or_votes() {
        let records = vec![
            record("SHOW", 2005, Some(8.2), Some(50000.0)),
            record("SHOW", 2005, None, Some(50000.0)),
            record("SHOW", 2005, Some(8.2), None),
            record("SHOW", 2005, None, None),
        ];

        let (kept, removed) = drop_missing_ratings(records);
        assert_eq!(kept.len(), 1);
        assert_eq!(removed, 3);
        assert!(kept.iter().all(Record::has_ratings));
    }

    #[test]
    fn test_keeps_null_title() {
        let mut r = record("MOVIE", 2001, Some(6.0), Some(10.0));
        r.title = None;

        let (kept, removed) = drop_missing_ratings(vec![r]);
        assert_eq!(kept.len(), 1);
        assert_eq!(removed, 0);
    }
}
