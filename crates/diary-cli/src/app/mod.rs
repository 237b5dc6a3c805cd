//! Application-level utilities for the Diary CLI.
//!
//! This module provides:
//! - Path and setting resolution for config and database files
//! - The application context handed to every menu command

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
