// Utility helpers for parsing and number formatting.
//
// Date coercion lives here so the transformer can work with typed values.
use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};

/// Coerce a paid year-month value into its 6-digit `YYYYMM` form.
///
/// - Trims whitespace.
/// - Accepts only ASCII digits.
/// - Left-pads shorter values with zeros, since numeric exports drop them.
/// - Returns `None` for empty input or anything longer than six digits.
pub fn coerce_year_month(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() || s.len() > 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("{:0>6}", s))
}

/// Parse a paid year-month value into the first day of that month.
pub fn parse_year_month(s: &str) -> Option<NaiveDate> {
    let compact = coerce_year_month(s)?;
    // A synthetic day turns `YYYYMM` into a full `YYYYMMDD` date.
    NaiveDate::parse_from_str(&format!("{}01", compact), "%Y%m%d").ok()
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` for counts in console messages
    // (e.g., `12,408 rows loaded`).
    n.to_formatted_string(&Locale::en)
}

/// `tabled` display hook for quantity columns.
pub fn display_quantity(n: &u64) -> String {
    format_int(*n)
}
