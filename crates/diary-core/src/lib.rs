//! # Diary Core
//!
//! Core library for Diary - a single-user, CLI-first personal journal.
//!
//! This crate provides the data model, storage abstraction and the paginated
//! entry browser, independent of the terminal front end.
//!
//! ## Architecture
//!
//! - **storage**: `StorageEngine` trait and the SQLite backend
//! - **browser**: paginated, filterable entry browsing with edit/delete
//! - **fs**: filesystem helpers for the database location

pub mod browser;
pub mod error;
pub mod fs;
pub mod storage;

pub use browser::{BrowseAction, BrowseOptions, BrowseOutcome, Browser, BrowserConsole, EntryView};
pub use error::{DiaryError, Result};
pub use storage::StorageEngine;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
