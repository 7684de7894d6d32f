/// Round to two decimals, ties to even on the exact binary value.
///
/// Goes through decimal formatting so `2.675` (stored as `2.67499...`) gives
/// `2.67` and large values never overflow.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// `part / total * 100`, rounded to two decimals. Zero total gives `0.0`.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(part as f64 / total as f64 * 100.0)
}
