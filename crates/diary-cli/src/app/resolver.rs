//! Path and setting resolution: flags first, then config, then defaults.

use std::path::PathBuf;

use diary_core::browser::DEFAULT_PAGE_SIZE;

use crate::cli::Cli;
use crate::config::{default_config_path, default_diary_path, DiaryConfig};

/// Resolve the config file path: `--config`/DIARY_CONFIG, then the XDG default.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(value) = cli.config.as_deref() {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the diary database path.
pub fn resolve_diary_path(cli: &Cli, config: &DiaryConfig) -> anyhow::Result<PathBuf> {
    if let Some(value) = cli.diary.as_deref() {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    if let Some(value) = config.diary.path.as_deref() {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_diary_path()
}

/// Resolve the browse page size, rejecting zero wherever it came from.
pub fn resolve_page_size(cli: &Cli, config: &DiaryConfig) -> anyhow::Result<usize> {
    let page_size = cli
        .page_size
        .or(config.browse.page_size)
        .unwrap_or(DEFAULT_PAGE_SIZE);
    if page_size == 0 {
        return Err(anyhow::anyhow!("Page size must be at least 1"));
    }
    Ok(page_size)
}
