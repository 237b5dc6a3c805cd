//! View entries command handler.

use tracing::info;

use diary_core::storage::EntryFilter;
use diary_core::{BrowseOptions, BrowseOutcome, Browser};

use crate::menu::Session;

pub fn handle_view(session: &mut Session<'_>) -> anyhow::Result<()> {
    browse(session, EntryFilter::All)?;
    Ok(())
}

/// Browse the entries selected by `filter` from the first page.
pub(super) fn browse(
    session: &mut Session<'_>,
    filter: EntryFilter,
) -> anyhow::Result<BrowseOutcome> {
    let options = BrowseOptions::new()
        .filter(filter)
        .page_size(session.page_size);
    info!(filter = ?options.filter, page_size = options.page_size, "browse started");

    let outcome = Browser::new(&mut *session.storage, &mut *session.console).run(&options)?;
    info!(?outcome, "browse finished");
    Ok(outcome)
}
