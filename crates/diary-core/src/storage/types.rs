//! Core data types for the storage layer.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Identifier assigned to an entry by the store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub i64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted journal entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Unique identifier for this entry
    pub id: EntryId,

    /// Free-text body
    pub content: String,

    /// When this entry was created (local clock); never changes after insert
    pub timestamp: NaiveDateTime,
}

/// Builder for creating new entries.
#[derive(Debug, Clone)]
pub struct NewEntry {
    /// Entry body
    pub content: String,

    /// Explicit creation time; the store uses the local clock when unset
    pub timestamp: Option<NaiveDateTime>,
}

impl NewEntry {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Filter selecting the working set of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EntryFilter {
    /// Every entry
    #[default]
    All,

    /// Entries whose content contains the text (case-sensitive)
    Contains(String),

    /// Entries created at or before the start of the given day
    OnOrBefore(NaiveDate),
}

impl EntryFilter {
    pub fn contains(query: impl Into<String>) -> Self {
        Self::Contains(query.into())
    }

    pub fn on_or_before(date: NaiveDate) -> Self {
        Self::OnOrBefore(date)
    }

    /// Latest timestamp a date filter admits.
    pub fn cutoff(date: NaiveDate) -> NaiveDateTime {
        date.and_time(NaiveTime::MIN)
    }
}

/// A 1-based page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub size: usize,
}

impl Page {
    pub fn new(number: usize, size: usize) -> Self {
        Self { number, size }
    }

    /// Number of entries preceding this page.
    pub fn offset(&self) -> usize {
        self.number.saturating_sub(1).saturating_mul(self.size)
    }

    /// Pages needed to hold `count` entries.
    pub fn count_for(count: usize, size: usize) -> usize {
        if size == 0 {
            return 0;
        }
        count.div_ceil(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_builder() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(8, 15, 0))
            .expect("valid datetime");

        let entry = NewEntry::new("morning pages").with_timestamp(at);

        assert_eq!(entry.content, "morning pages");
        assert_eq!(entry.timestamp, Some(at));
        assert!(NewEntry::new("x").timestamp.is_none());
    }

    #[test]
    fn test_date_cutoff_is_start_of_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).expect("valid date");
        let cutoff = EntryFilter::cutoff(date);
        assert_eq!(cutoff.to_string(), "2024-01-31 00:00:00");
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(Page::new(1, 5).offset(), 0);
        assert_eq!(Page::new(3, 2).offset(), 4);
        assert_eq!(Page::new(2, usize::MAX).offset(), usize::MAX);
    }

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(Page::count_for(0, 5), 0);
        assert_eq!(Page::count_for(5, 5), 1);
        assert_eq!(Page::count_for(6, 5), 2);
        assert_eq!(Page::count_for(5, 2), 3);
        assert_eq!(Page::count_for(1, 1), 1);
    }

    #[test]
    fn test_entry_id_display() {
        assert_eq!(EntryId(42).to_string(), "42");
    }
}
