//! The browser's view of the terminal.

use crate::error::Result;
use crate::storage::Entry;

/// What the user asked for while an entry is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    /// Show the next entry of the current page
    Next,
    /// Skip the rest of this page
    NextPage,
    /// Replace the content of the entry in view
    Edit,
    /// Remove the entry in view (after confirmation)
    Delete,
    /// Leave the browser
    Quit,
}

impl BrowseAction {
    /// Parse a typed command. Anything unrecognised, including an empty
    /// line, means "next entry".
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "p" => Self::NextPage,
            "e" => Self::Edit,
            "d" => Self::Delete,
            "q" => Self::Quit,
            _ => Self::Next,
        }
    }
}

/// One entry as presented, with its position in the working set.
#[derive(Debug, Clone, Copy)]
pub struct EntryView<'a> {
    /// Current page, 1-based
    pub page: usize,
    /// Pages in the working set when this page was loaded
    pub total_pages: usize,
    /// Position of the entry across the whole working set, 1-based
    pub record: usize,
    /// Size of the working set right now
    pub total_records: usize,
    pub entry: &'a Entry,
}

/// Input and output the browser needs from whoever is driving it.
pub trait BrowserConsole {
    /// Render an entry and its position.
    fn show_entry(&mut self, view: &EntryView<'_>) -> Result<()>;

    /// Ask what to do with the entry on screen.
    fn read_action(&mut self) -> Result<BrowseAction>;

    /// Show the current content and read the replacement text.
    fn read_replacement(&mut self, entry: &Entry) -> Result<String>;

    /// Acknowledge a saved edit.
    fn entry_updated(&mut self, entry: &Entry) -> Result<()>;

    /// Ask whether the entry should really be deleted.
    fn confirm_delete(&mut self, entry: &Entry) -> Result<bool>;

    /// Report that the working set has nothing left to show.
    fn no_more_entries(&mut self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_actions() {
        assert_eq!(BrowseAction::parse("n"), BrowseAction::Next);
        assert_eq!(BrowseAction::parse("p"), BrowseAction::NextPage);
        assert_eq!(BrowseAction::parse("e"), BrowseAction::Edit);
        assert_eq!(BrowseAction::parse("d"), BrowseAction::Delete);
        assert_eq!(BrowseAction::parse("q"), BrowseAction::Quit);
    }

    #[test]
    fn test_parse_trims_and_ignores_case() {
        assert_eq!(BrowseAction::parse("  Q \n"), BrowseAction::Quit);
        assert_eq!(BrowseAction::parse("D"), BrowseAction::Delete);
    }

    #[test]
    fn test_parse_defaults_to_next() {
        assert_eq!(BrowseAction::parse(""), BrowseAction::Next);
        assert_eq!(BrowseAction::parse("x"), BrowseAction::Next);
        assert_eq!(BrowseAction::parse("quit"), BrowseAction::Next);
    }
}
