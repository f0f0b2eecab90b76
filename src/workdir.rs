// src/workdir.rs

//! Resolving and entering the launcher directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{LaunchError, Result};

/// Directory containing the running executable, with symlinks resolved.
pub fn launcher_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| LaunchError::LauncherDir(format!("current_exe failed: {e}")))?;
    dir_of_executable(&exe)
}

/// Parent directory of `exe` after canonicalization.
pub fn dir_of_executable(exe: &Path) -> Result<PathBuf> {
    let exe = std::fs::canonicalize(exe)
        .map_err(|e| LaunchError::LauncherDir(format!("canonicalizing {exe:?}: {e}")))?;

    match exe.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(parent.to_path_buf()),
        _ => Err(LaunchError::LauncherDir(format!(
            "{exe:?} has no parent directory"
        ))),
    }
}

/// Make `dir` the process's current working directory.
pub fn enter(dir: &Path) -> Result<()> {
    std::env::set_current_dir(dir)?;
    debug!(cwd = ?dir, "changed working directory");
    Ok(())
}
