//! Helper functions for the Diary CLI.
//!
//! This module provides parsing utilities for user input.

mod parsing;

pub use parsing::parse_date;
