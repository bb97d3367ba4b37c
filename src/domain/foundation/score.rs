//! Shared numeric helpers for scores and confidences.
//!
//! Every stage that bounds or rounds a figure goes through these two
//! functions so fusion, risk and option confidences round identically.

/// Bounds `value` to `[lo, hi]`. NaN collapses to `lo`.
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        return lo;
    }
    value.max(lo).min(hi)
}

/// Rounds to `places` decimal places, correctly rounding the exact binary
/// value. `0.475` is stored just below the midpoint and rounds to `0.47`.
pub fn round_to(value: f64, places: u32) -> f64 {
    format!("{:.*}", places as usize, value)
        .parse()
        .unwrap_or(value)
}

/// Arithmetic mean, or `0.0` for an empty sequence.
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
