//! Atomic write primitives
//!
//! Uses temp→rename so readers never observe a half-written state or
//! settings file.

use crate::errors::{io_error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories
///
/// # Errors
///
/// `ExErrorKind::Io` if the directory, temp file, or rename fails.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error("create_parent_dir", parent, e))?;
        }
    }

    let temp_path = temp_path_for(target_path);

    fs::write(&temp_path, content).map_err(|e| io_error("write_temp", &temp_path, e))?;

    if let Err(e) = fs::rename(&temp_path, target_path) {
        // Best effort: do not leave the temp file behind
        let _ = fs::remove_file(&temp_path);
        return Err(io_error("rename_temp", target_path, e));
    }

    Ok(())
}

/// Sibling temp path: `<name>.tmp` next to the target
fn temp_path_for(target_path: &Path) -> PathBuf {
    let mut name = target_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    target_path.with_file_name(name)
}
