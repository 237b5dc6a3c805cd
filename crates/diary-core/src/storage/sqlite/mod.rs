//! File-backed SQLite storage backend.
//!
//! Entries live in a single `entry` table keyed by an auto-assigned integer.
//! Every mutation is written through immediately; there is no explicit close,
//! the connection is released when the storage value is dropped.

mod row;

use std::path::Path;

use chrono::{Local, SubsecRound};
use rusqlite::{Connection, OptionalExtension, ToSql};
use tracing::{debug, info};

use crate::error::{DiaryError, Result};
use crate::storage::traits::StorageEngine;
use crate::storage::types::{Entry, EntryFilter, EntryId, NewEntry, Page};

use row::{format_timestamp, EntryRow, ENTRY_COLUMNS};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS entry (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    content TEXT NOT NULL,
    timestamp TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS entry_timestamp ON entry (timestamp);
"#;

/// SQLite storage engine.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open a private, in-memory database. Nothing is persisted.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// WHERE clause and bound parameters for a filter.
    fn filter_clause(filter: &EntryFilter) -> (Option<&'static str>, Vec<Box<dyn ToSql>>) {
        match filter {
            EntryFilter::All => (None, Vec::new()),
            EntryFilter::Contains(query) => (
                Some("instr(content, ?) > 0"),
                vec![Box::new(query.clone()) as Box<dyn ToSql>],
            ),
            EntryFilter::OnOrBefore(date) => {
                let cutoff = format_timestamp(&EntryFilter::cutoff(*date));
                (Some("timestamp <= ?"), vec![Box::new(cutoff) as Box<dyn ToSql>])
            }
        }
    }

    /// SQLite integers are signed; larger values saturate, which past the
    /// end of any real table selects the same rows.
    fn to_i64(value: usize) -> i64 {
        i64::try_from(value).unwrap_or(i64::MAX)
    }
}

impl StorageEngine for SqliteStorage {
    fn open(path: &Path) -> Result<Self> {
        crate::fs::ensure_parent_dir(path)?;
        let conn = Connection::open(path).map_err(|e| {
            DiaryError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "opened diary database");
        Self::init(conn)
    }

    fn insert_entry(&mut self, entry: &NewEntry) -> Result<Entry> {
        if entry.content.trim().is_empty() {
            return Err(DiaryError::Validation(
                "Entry content cannot be empty".to_string(),
            ));
        }

        // Stored text keeps microseconds; the returned entry must match it.
        let timestamp = entry
            .timestamp
            .unwrap_or_else(|| Local::now().naive_local())
            .trunc_subsecs(6);
        self.conn.execute(
            "INSERT INTO entry (content, timestamp) VALUES (?, ?)",
            (&entry.content, format_timestamp(&timestamp)),
        )?;
        let id = EntryId(self.conn.last_insert_rowid());
        info!(%id, "created entry");

        Ok(Entry {
            id,
            content: entry.content.clone(),
            timestamp,
        })
    }

    fn get_entry(&self, id: EntryId) -> Result<Option<Entry>> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {} FROM entry WHERE id = ?", ENTRY_COLUMNS),
                [id.0],
                EntryRow::from_row,
            )
            .optional()?;
        row.map(Entry::try_from).transpose()
    }

    fn list_entries(&self, filter: &EntryFilter, page: Option<Page>) -> Result<Vec<Entry>> {
        let (condition, mut params) = Self::filter_clause(filter);

        let mut query = format!("SELECT {} FROM entry", ENTRY_COLUMNS);
        if let Some(condition) = condition {
            query.push_str(" WHERE ");
            query.push_str(condition);
        }
        query.push_str(" ORDER BY timestamp DESC, id DESC");

        if let Some(page) = page {
            if page.number == 0 || page.size == 0 {
                return Err(DiaryError::InvalidInput(
                    "Page number and size must be positive".to_string(),
                ));
            }
            query.push_str(" LIMIT ? OFFSET ?");
            params.push(Box::new(Self::to_i64(page.size)));
            params.push(Box::new(Self::to_i64(page.offset())));
        }

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter()),
            EntryRow::from_row,
        )?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(Entry::try_from(row?)?);
        }
        debug!(?filter, ?page, returned = entries.len(), "listed entries");
        Ok(entries)
    }

    fn count_entries(&self, filter: &EntryFilter) -> Result<usize> {
        let (condition, params) = Self::filter_clause(filter);

        let mut query = String::from("SELECT COUNT(*) FROM entry");
        if let Some(condition) = condition {
            query.push_str(" WHERE ");
            query.push_str(condition);
        }

        let count: i64 = self.conn.query_row(
            &query,
            rusqlite::params_from_iter(params.iter()),
            |row| row.get(0),
        )?;
        usize::try_from(count)
            .map_err(|_| DiaryError::Storage(format!("Invalid entry count: {}", count)))
    }

    fn update_entry(&mut self, id: EntryId, content: &str) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE entry SET content = ? WHERE id = ?",
            (content, id.0),
        )?;
        if changed == 0 {
            return Err(DiaryError::NotFound(format!("Entry {}", id)));
        }
        info!(%id, "updated entry");
        Ok(())
    }

    fn delete_entry(&mut self, id: EntryId) -> Result<()> {
        let changed = self.conn.execute("DELETE FROM entry WHERE id = ?", [id.0])?;
        if changed == 0 {
            return Err(DiaryError::NotFound(format!("Entry {}", id)));
        }
        info!(%id, "deleted entry");
        Ok(())
    }
}
