//! Tracing initialization and subscriber setup.
//!
//! Diagnostics go to stderr so they never interleave with the prompts on
//! stdout. The filter comes from `DIARY_LOG` (same syntax as `RUST_LOG`) and
//! defaults to `warn`, which keeps an interactive session quiet.

use std::io::IsTerminal;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "DIARY_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Build the filter from `DIARY_LOG`, falling back to the default on absence
/// or a malformed directive.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber.
///
/// Idempotent: only the first call takes effect, later calls are ignored.
pub fn init_logging() {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);

    let subscriber = tracing_subscriber::registry().with(env_filter()).with(layer);

    let _ = subscriber.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_logging();
        init_logging();
        tracing::debug!("still fine after double init");
    }
}
