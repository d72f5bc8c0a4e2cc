use std::collections::HashSet;

use crate::record::Record;

/// Removes records identical across all fields to an earlier record.
///
/// The first occurrence wins and relative order is preserved, so running it
/// again on its own output removes nothing.
pub fn drop_duplicates(records: Vec<Record>) -> (Vec<Record>, usize) {
    let before = records.len();
    let mut seen = HashSet::with_capacity(before);
    let mut kept = Vec::with_capacity(before);

    for record in records {
        if seen.contains(&record) {
            continue;
        }
        seen.insert(record.clone());
        kept.push(record);
    }

    let removed = before - kept.len();
    (kept, removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::tests::record;

    #[test]
    fn test_identical_rows_collapse_to_one() {
        let a = record("tv show", 2005, Some(8.2), Some(50000.0));
        let (kept, removed) = drop_duplicates(vec![a.clone(), a.clone()]);

        assert_eq!(kept, vec![a]);
        assert_eq!(removed, 1);
    }

    #[test]
    fn test_first_occurrence_wins_and_order_is_stable() {
        let mut a = record("SHOW", 2005, Some(8.2), Some(1.0));
        a.name = "a".into();
        let mut b = a.clone();
        b.name = "b".into();
        let mut c = a.clone();
        c.name = "c".into();

        let (kept, _) = drop_duplicates(vec![a.clone(), b.clone(), a.clone(), c.clone(), b.clone()]);
        let names: Vec<&str> = kept.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_near_duplicates_survive() {
        let a = record("SHOW", 2005, Some(8.2), Some(1.0));
        let b = record("SHOW", 2005, Some(8.2), Some(2.0));

        let (kept, removed) = drop_duplicates(vec![a, b]);
        assert_eq!(kept.len(), 2);
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_idempotent() {
        let a = record("SHOW", 2005, Some(8.2), Some(1.0));
        let b = record("MOVIE", 2010, Some(5.0), Some(3.0));
        let (once, _) = drop_duplicates(vec![a.clone(), b.clone(), a]);
        let (twice, removed) = drop_duplicates(once.clone());

        assert_eq!(once, twice);
        assert_eq!(removed, 0);
    }
}
