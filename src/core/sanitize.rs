// src/core/sanitize.rs
//
// Cell-level hygiene for tabular input. Nothing here allocates unless it
// has to hand back an owned value.

/// Markers a spreadsheet or dataframe export writes for "no value".
const MISSING_MARKERS: [&str; 6] = ["na", "nan", "n/a", "null", "none", "<na>"];

/// Trimmed cell, or `None` when blank or a missing-value marker.
pub fn present(cell: &str) -> Option<&str> {
    let t = cell.trim();
    if t.is_empty() || MISSING_MARKERS.iter().any(|m| t.eq_ignore_ascii_case(m)) {
        None
    } else {
        Some(t)
    }
}

/// Owned variant of [`present`], for optional text fields.
pub fn present_owned(cell: &str) -> Option<String> {
    present(cell).map(|s| s!(s))
}

/// Season/week cells: integers, or floats with no fractional part
/// (dataframe exports turn int columns with gaps into `2023.0`).
pub fn parse_ordinal(cell: &str) -> Option<i64> {
    let t = present(cell)?;
    if let Ok(v) = t.parse::<i64>() {
        return Some(v);
    }
    let f = t.parse::<f64>().ok()?;
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
