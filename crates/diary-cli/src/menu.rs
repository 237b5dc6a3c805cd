//! The top-level command menu.

use tracing::debug;

use diary_core::StorageEngine;

use crate::commands::{handle_add, handle_search, handle_search_by_date, handle_view};
use crate::ui::render::choices;
use crate::ui::Console;

/// Everything a menu command works with: the open store, the console and the
/// browse page size.
pub struct Session<'a> {
    pub storage: &'a mut dyn StorageEngine,
    pub console: &'a mut Console,
    pub page_size: usize,
}

type Handler = fn(&mut Session<'_>) -> anyhow::Result<()>;

/// One line of the menu.
pub struct MenuItem {
    pub key: &'static str,
    pub label: &'static str,
    pub handler: Handler,
}

/// Menu commands in display order.
pub const MENU: &[MenuItem] = &[
    MenuItem {
        key: "a",
        label: "Add entry",
        handler: handle_add,
    },
    MenuItem {
        key: "v",
        label: "View entries",
        handler: handle_view,
    },
    MenuItem {
        key: "s",
        label: "Search entries",
        handler: handle_search,
    },
    MenuItem {
        key: "t",
        label: "Search entries by date",
        handler: handle_search_by_date,
    },
];

const QUIT_KEY: &str = "q";

/// Show the menu and dispatch choices until the user quits or input ends.
pub fn run_menu(session: &mut Session<'_>) -> anyhow::Result<()> {
    let listing: Vec<(&str, &str)> = MENU.iter().map(|item| (item.key, item.label)).collect();

    loop {
        session.console.println("Press 'q' to quit")?;
        session.console.print(&choices(&listing))?;

        let choice = match session.console.prompt("Action:")? {
            Some(choice) => choice.to_lowercase(),
            None => break,
        };
        session.console.println("")?;

        if choice == QUIT_KEY {
            break;
        }
        if let Some(item) = MENU.iter().find(|item| item.key == choice) {
            debug!(key = item.key, "menu dispatch");
            (item.handler)(session)?;
        }
    }

    debug!("menu closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use diary_core::storage::{NewEntry, SqliteStorage};

    use crate::ui::testing::scripted;

    fn store_with(content: &str) -> SqliteStorage {
        let mut storage = SqliteStorage::open_in_memory().expect("store");
        let at = NaiveDate::from_ymd_opt(2024, 6, 3)
            .and_then(|d| d.and_hms_opt(9, 5, 0))
            .expect("valid");
        storage
            .insert_entry(&NewEntry::new(content).with_timestamp(at))
            .expect("insert");
        storage
    }

    #[test]
    fn test_menu_keys_are_unique_and_exclude_quit() {
        let mut keys: Vec<&str> = MENU.iter().map(|item| item.key).collect();
        assert_eq!(keys, ["a", "v", "s", "t"]);
        keys.dedup();
        assert_eq!(keys.len(), MENU.len());
        assert!(!keys.contains(&QUIT_KEY));
    }

    #[test]
    fn test_quit_ends_menu() {
        let mut storage = store_with("hello");
        let (mut console, out) = scripted("q\nv\n");
        let mut session = Session {
            storage: &mut storage,
            console: &mut console,
            page_size: 5,
        };

        run_menu(&mut session).expect("menu");

        let text = out.contents();
        assert_eq!(text.matches("Press 'q' to quit").count(), 1);
        assert!(text.contains(
            "a) Add entry\nv) View entries\ns) Search entries\nt) Search entries by date\n"
        ));
        assert!(!text.contains("hello"));
    }

    #[test]
    fn test_end_of_input_ends_menu() {
        let mut storage = store_with("hello");
        let (mut console, _) = scripted("");
        let mut session = Session {
            storage: &mut storage,
            console: &mut console,
            page_size: 5,
        };

        run_menu(&mut session).expect("menu");
    }

    #[test]
    fn test_unknown_keys_are_ignored_and_view_dispatches() {
        let mut storage = store_with("hello");
        let (mut console, out) = scripted("x\nV\n\nq\n");
        let mut session = Session {
            storage: &mut storage,
            console: &mut console,
            page_size: 5,
        };

        run_menu(&mut session).expect("menu");

        let text = out.contents();
        assert_eq!(text.matches("Press 'q' to quit").count(), 3);
        assert!(text.contains("Monday June 03, 2024 09:05AM"));
        assert!(text.contains("hello"));
        assert!(text.contains("No more entries."));
    }
}
