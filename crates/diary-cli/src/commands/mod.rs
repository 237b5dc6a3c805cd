//! Menu command handlers.

mod entries;

pub use entries::{handle_add, handle_search, handle_search_by_date, handle_view};
