//! Application context for the Diary CLI.
//!
//! Combines CLI arguments with the lazily-loaded configuration file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use tracing::debug;

use diary_core::storage::SqliteStorage;
use diary_core::StorageEngine;

use crate::cli::Cli;
use crate::config::{read_config_or_default, DiaryConfig};

use super::resolver::{resolve_config_path, resolve_diary_path, resolve_page_size};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<DiaryConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&DiaryConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path(self.cli)?;
            debug!(path = %path.display(), "loading config");
            read_config_or_default(&path)
        })
    }

    /// Where the diary database lives.
    pub fn diary_path(&self) -> anyhow::Result<PathBuf> {
        resolve_diary_path(self.cli, self.config()?)
    }

    /// Entries per page when browsing.
    pub fn page_size(&self) -> anyhow::Result<usize> {
        resolve_page_size(self.cli, self.config()?)
    }

    /// Open the diary database, creating it on first use.
    pub fn open_storage(&self) -> anyhow::Result<SqliteStorage> {
        let path = self.diary_path()?;
        SqliteStorage::open(&path)
            .map_err(|e| anyhow::anyhow!("Cannot open diary at {}: {}", path.display(), e))
    }
}
