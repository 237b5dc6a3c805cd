//! UI context for environment detection.

use std::io::IsTerminal;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Whether stdin is a TTY, so line-editing prompts can be used
    pub interactive: bool,
}

impl UiContext {
    /// Create context from the environment.
    ///
    /// Color is disabled when stdout is not a TTY, `NO_COLOR` is set, or
    /// `TERM=dumb`.
    pub fn from_env() -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        Self {
            color: is_tty && !no_color_env && !term_is_dumb,
            interactive: is_tty && std::io::stdin().is_terminal(),
        }
    }

    /// Context for scripted input and captured output.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self::default()
    }
}
