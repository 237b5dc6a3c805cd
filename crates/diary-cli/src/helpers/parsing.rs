//! Parsing helpers for user-typed values.

use chrono::NaiveDate;

/// Layout accepted by the date search prompt.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).map_err(|_| {
        anyhow::anyhow!(
            "Invalid date: {:?} (expected YYYY-MM-DD, e.g. 2024-06-03)",
            value.trim()
        )
    })
}
