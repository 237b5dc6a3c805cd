//! Add entry command handler.

use tracing::debug;

use diary_core::storage::NewEntry;

use crate::menu::Session;

pub fn handle_add(session: &mut Session<'_>) -> anyhow::Result<()> {
    let console = &mut *session.console;
    console.println("Enter your thoughts.")?;
    console.println("Press Ctrl+D (Ctrl+Z on Windows) to finish.")?;

    let content = console.read_text()?;
    if content.is_empty() {
        debug!("nothing to save");
        return Ok(());
    }

    if !console.confirm("Do you want to save your entry?", true)? {
        debug!("entry discarded");
        return Ok(());
    }

    session.storage.insert_entry(&NewEntry::new(content))?;
    session.console.success("Your entry was saved successfully.")?;
    session.console.println("")?;
    Ok(())
}
