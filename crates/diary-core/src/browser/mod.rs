//! Paginated entry browser.
//!
//! The browser walks the working set (newest first, optionally filtered) one
//! entry at a time and lets the user edit or delete the entry in view. Pages
//! are advanced in a loop, so a long diary never grows the call stack.
//!
//! Counts are re-read from the store as the session goes on: after a delete,
//! "record Y of N" shows the shrunken N, and the next page is sliced from the
//! store as it is at that moment.

mod console;

use tracing::debug;

use crate::error::{DiaryError, Result};
use crate::storage::{EntryFilter, Page, StorageEngine};

pub use console::{BrowseAction, BrowserConsole, EntryView};

/// Entries shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// What to browse and where to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseOptions {
    pub filter: EntryFilter,
    pub page_size: usize,
    pub start_page: usize,
}

impl Default for BrowseOptions {
    fn default() -> Self {
        Self {
            filter: EntryFilter::All,
            page_size: DEFAULT_PAGE_SIZE,
            start_page: 1,
        }
    }
}

impl BrowseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: EntryFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn start_page(mut self, start_page: usize) -> Self {
        self.start_page = start_page;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(DiaryError::InvalidInput(
                "Page size must be at least 1".to_string(),
            ));
        }
        if self.start_page == 0 {
            return Err(DiaryError::InvalidInput(
                "Pages are numbered from 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// How a browsing session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseOutcome {
    /// Every remaining entry was shown (or there were none)
    Exhausted,
    /// The user quit early
    Quit,
}

/// Drives one browsing session over a store and a console.
pub struct Browser<'a, S: ?Sized, C: ?Sized> {
    storage: &'a mut S,
    console: &'a mut C,
}

impl<'a, S, C> Browser<'a, S, C>
where
    S: StorageEngine + ?Sized,
    C: BrowserConsole + ?Sized,
{
    pub fn new(storage: &'a mut S, console: &'a mut C) -> Self {
        Self { storage, console }
    }

    /// Run the session until the entries run out or the user quits.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::InvalidInput` for a zero page size or start page;
    /// store and console failures end the session and are passed through.
    pub fn run(&mut self, options: &BrowseOptions) -> Result<BrowseOutcome> {
        options.validate()?;
        let filter = &options.filter;
        let mut page_number = options.start_page;

        loop {
            let total_records = self.storage.count_entries(filter)?;
            let total_pages = Page::count_for(total_records, options.page_size);
            if total_records == 0 || page_number > total_pages {
                debug!(page_number, total_pages, "browse exhausted");
                self.console.no_more_entries()?;
                return Ok(BrowseOutcome::Exhausted);
            }

            let page = Page::new(page_number, options.page_size);
            let entries = self.storage.list_entries(filter, Some(page))?;
            debug!(page_number, total_pages, shown = entries.len(), "browsing page");

            for (index, entry) in entries.iter().enumerate() {
                let view = EntryView {
                    page: page_number,
                    total_pages,
                    record: page.offset() + index + 1,
                    total_records: self.storage.count_entries(filter)?,
                    entry,
                };
                self.console.show_entry(&view)?;

                match self.console.read_action()? {
                    BrowseAction::Next => {}
                    BrowseAction::NextPage => break,
                    BrowseAction::Edit => {
                        let content = self.console.read_replacement(entry)?;
                        self.storage.update_entry(entry.id, &content)?;
                        self.console.entry_updated(entry)?;
                    }
                    BrowseAction::Delete => {
                        if self.console.confirm_delete(entry)? {
                            self.storage.delete_entry(entry.id)?;
                        }
                    }
                    BrowseAction::Quit => return Ok(BrowseOutcome::Quit),
                }
            }

            page_number += 1;
        }
    }
}
