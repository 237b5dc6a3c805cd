//! String formatting utilities for UI rendering.

use chrono::NaiveDateTime;

/// Display layout for entry timestamps, e.g. `Monday June 03, 2024 09:05PM`.
pub const ENTRY_TIMESTAMP_FORMAT: &str = "%A %B %d, %Y %I:%M%p";

/// Format an entry timestamp for display.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(ENTRY_TIMESTAMP_FORMAT).to_string()
}

/// A rule of `+` as wide as `text` prints.
pub fn underline(text: &str) -> String {
    "+".repeat(text.chars().count())
}
