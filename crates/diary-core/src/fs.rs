//! Filesystem utilities for the diary database location.

use std::fs;
use std::io;
use std::path::Path;

/// Create the parent directory of `path` if it does not exist yet.
///
/// Paths without a parent component (a bare file name) resolve against the
/// working directory and need nothing created.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent).map_err(|err| {
                io::Error::new(
                    err.kind(),
                    format!("Failed to create directory {}: {}", parent.display(), err),
                )
            })
        }
        _ => Ok(()),
    }
}
