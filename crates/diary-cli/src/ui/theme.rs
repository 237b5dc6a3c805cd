//! Text styles.

use owo_colors::{OwoColorize, Style};

/// Named styles used across the UI.
pub mod styles {
    use owo_colors::Style;

    /// Labels and metadata
    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    /// Headings and the entry timestamp
    pub fn bold() -> Style {
        Style::new().bold()
    }

    /// Confirmations
    pub fn success() -> Style {
        Style::new().green()
    }

    /// Hints after bad input
    pub fn warning() -> Style {
        Style::new().yellow()
    }
}

/// Apply `style` when color is enabled, otherwise return the text unchanged.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
