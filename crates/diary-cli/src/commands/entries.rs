//! Entry commands: add, view, and the two searches.

mod add;
mod search;
mod view;

pub use add::handle_add;
pub use search::{handle_search, handle_search_by_date};
pub use view::handle_view;
