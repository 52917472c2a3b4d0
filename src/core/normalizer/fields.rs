//! Per-cell conversions

use chrono::NaiveDate;

/// Flag cell is set iff its trimmed, upper-cased value is exactly `X`
pub fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().to_uppercase() == "X")
}

/// Whether a flag cell holds something other than `X` or blank
pub fn is_unexpected_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        let v = v.trim();
        !v.is_empty() && !v.eq_ignore_ascii_case("x")
    })
}

/// First character of the trimmed, upper-cased value; empty when absent
pub fn first_char_upper(value: Option<&str>) -> String {
    value
        .and_then(|v| v.trim().to_uppercase().chars().next())
        .map(String::from)
        .unwrap_or_default()
}

/// Parse a birth date with `format`, substituting `fallback` on any failure
pub fn parse_birth_date(value: Option<&str>, format: &str, fallback: NaiveDate) -> NaiveDate {
    value
        .and_then(|v| NaiveDate::parse_from_str(v.trim(), format).ok())
        .unwrap_or(fallback)
}
