//! Locale-aware numeric parsing for bill amounts.

/// Parse a number formatted with `.` as thousands separator and `,` as
/// decimal separator (e.g. "1.135,57" -> 1135.57).
///
/// Returns `None` when the cleaned string is not a valid decimal literal;
/// callers treat that the same as an absent field.
pub fn parse_locale_number(s: &str) -> Option<f64> {
    let normalized = s.trim().replace('.', "").replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}
