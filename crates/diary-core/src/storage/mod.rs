//! Storage abstraction for Diary.
//!
//! This module defines the `StorageEngine` trait and the core types for
//! reading and mutating journal entries.
//!
//! ## Architecture
//!
//! The browser and the CLI only ever talk to the trait; the single shipped
//! backend is a file-backed SQLite database (`SqliteStorage`). The process
//! opens one handle at startup and passes it explicitly to whatever needs it.

pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export public types
pub use sqlite::SqliteStorage;
pub use traits::StorageEngine;
pub use types::{Entry, EntryFilter, EntryId, NewEntry, Page};
