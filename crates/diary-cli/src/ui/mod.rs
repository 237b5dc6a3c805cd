//! UI primitives for the Diary CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color)
//! - **Console**: Prompts, confirmations and free-text input
//! - **Theme**: Text styles
//! - **Render**: Entry blocks and choice lists
//! - **Format**: Timestamp and rule formatting

mod console;
mod context;
pub mod format;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use console::Console;
pub use context::UiContext;

#[cfg(test)]
pub(crate) use console::testing;
