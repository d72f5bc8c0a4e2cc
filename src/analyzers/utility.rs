/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds to the nearest integer, halves away from zero (`f64::round`).
///
/// Used both to bucket scores and to round mean vote counts.
pub fn round_to_int(value: f64) -> i64 {
    value.round() as i64
}
