//! Storage engine trait definition.
//!
//! The `StorageEngine` trait is everything the browser and the menu commands
//! need from persistence. Keeping it narrow lets tests swap the file-backed
//! database for an in-memory one without touching the callers.

use std::path::Path;

use super::types::{Entry, EntryFilter, EntryId, NewEntry, Page};
use crate::error::Result;

/// Storage engine interface for journal entries.
///
/// All implementations must ensure:
/// - Identifiers are assigned by the store and never reused for another entry
/// - Listings are ordered newest first (timestamp descending, then id descending)
/// - Updates touch `content` only
/// - Deletes are permanent
pub trait StorageEngine {
    /// Open the store at `path`, creating the file and schema if missing.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::Storage` if the file cannot be opened or the
    /// schema cannot be created.
    fn open(path: &Path) -> Result<Self>
    where
        Self: Sized;

    // --- Entry operations ---

    /// Insert a new entry.
    ///
    /// # Returns
    ///
    /// Returns the stored entry, including its assigned id and timestamp.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::Validation` if the content is blank.
    fn insert_entry(&mut self, entry: &NewEntry) -> Result<Entry>;

    /// Get an entry by ID.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(entry))` if found, `Ok(None)` if not found.
    fn get_entry(&self, id: EntryId) -> Result<Option<Entry>>;

    /// List entries matching the filter, newest first.
    ///
    /// With `page` set, only that slice of the working set is returned; a page
    /// past the end yields an empty list.
    fn list_entries(&self, filter: &EntryFilter, page: Option<Page>) -> Result<Vec<Entry>>;

    /// Count entries matching the filter.
    fn count_entries(&self, filter: &EntryFilter) -> Result<usize>;

    /// Replace the content of an entry. The timestamp is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::NotFound` if no entry has this id.
    fn update_entry(&mut self, id: EntryId, content: &str) -> Result<()>;

    /// Permanently remove an entry.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::NotFound` if no entry has this id.
    fn delete_entry(&mut self, id: EntryId) -> Result<()>;
}
