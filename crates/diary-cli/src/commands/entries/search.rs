//! Search command handlers.

use tracing::debug;

use diary_core::storage::EntryFilter;

use crate::helpers::parse_date;
use crate::menu::Session;

use super::view::browse;

pub fn handle_search(session: &mut Session<'_>) -> anyhow::Result<()> {
    let query = match session.console.prompt("Search query:")? {
        Some(query) => query,
        None => return Ok(()),
    };
    session.console.println("")?;

    browse(session, EntryFilter::contains(query))?;
    Ok(())
}

/// Browse entries made on or before a typed date, asking again until the
/// date parses.
pub fn handle_search_by_date(session: &mut Session<'_>) -> anyhow::Result<()> {
    let date = loop {
        let answer = match session.console.prompt("Search date query: [YYYY-MM-DD]")? {
            Some(answer) => answer,
            None => return Ok(()),
        };
        match parse_date(&answer) {
            Ok(date) => break date,
            Err(err) => {
                debug!(%err, "rejected date input");
                session.console.warn(&err.to_string())?;
            }
        }
    };
    session.console.println("")?;

    browse(session, EntryFilter::on_or_before(date))?;
    Ok(())
}
