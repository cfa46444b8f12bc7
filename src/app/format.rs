//! Human-readable size formatting
//!
//! Pure function mapping a byte count to a display string. Unit selection is
//! logarithmic with GB as the ceiling: sizes at or above 1024^3 are still
//! rendered in GB. Values are rounded to at most two fractional digits with
//! trailing zeros stripped.

use crate::constants::format::{UNIT_BASE, UNIT_LABELS};

/// Convert a byte count to a human-readable string
///
/// # Examples
///
/// ```
/// use drop_uploader::app::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(1536), "1.5 KB");
/// assert_eq!(format_size(5 * 1024 * 1024), "5 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let exponent = (bytes as f64).log(UNIT_BASE).floor() as usize;
    let exponent = exponent.min(UNIT_LABELS.len() - 1);
    let scaled = bytes as f64 / UNIT_BASE.powi(exponent as i32);

    // Round to two decimals; Display for f64 drops trailing zeros.
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNIT_LABELS[exponent])
}
