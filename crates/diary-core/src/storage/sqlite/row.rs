//! Entry row type for database queries.

use chrono::NaiveDateTime;

use crate::error::{DiaryError, Result};
use crate::storage::types::{Entry, EntryId};

/// On-disk timestamp layout. Fixed width, so lexical order is chronological.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Columns selected by every entry query, in `EntryRow` order.
pub const ENTRY_COLUMNS: &str = "id, content, timestamp";

/// Raw row data from the entry table, before parsing into domain types.
#[derive(Debug)]
pub struct EntryRow {
    pub id: i64,
    pub content: String,
    pub timestamp: String,
}

impl EntryRow {
    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            content: row.get(1)?,
            timestamp: row.get(2)?,
        })
    }
}

impl TryFrom<EntryRow> for Entry {
    type Error = DiaryError;

    fn try_from(row: EntryRow) -> Result<Self> {
        let timestamp = NaiveDateTime::parse_from_str(&row.timestamp, TIMESTAMP_FORMAT)
            .map_err(|e| DiaryError::Storage(format!("Invalid timestamp: {}", e)))?;

        Ok(Entry {
            id: EntryId(row.id),
            content: row.content,
            timestamp,
        })
    }
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
