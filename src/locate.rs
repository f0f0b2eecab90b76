// src/locate.rs

//! Executable lookup on the system search path.
//!
//! [`SearchPath`] is an explicit snapshot of `PATH` (and, on Windows,
//! `PATHEXT`) so lookups can be tested without touching process-wide
//! environment variables.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::trace;

/// Extensions tried on Windows when `PATHEXT` is unset.
const DEFAULT_WINDOWS_EXTENSIONS: &[&str] = &[".COM", ".EXE", ".BAT", ".CMD"];

/// Ordered list of directories to search plus executable extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
    extensions: Vec<String>,
}

impl SearchPath {
    /// Search `dirs` using the platform's default extensions.
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        let extensions = if cfg!(windows) {
            DEFAULT_WINDOWS_EXTENSIONS.iter().map(|s| s.to_string()).collect()
        } else {
            Vec::new()
        };
        Self { dirs, extensions }
    }

    /// Snapshot `PATH` / `PATHEXT` from the current environment.
    pub fn from_env() -> Self {
        let path_var = std::env::var_os("PATH");
        let mut search = Self::from_path_var(path_var.as_deref());

        if cfg!(windows) {
            if let Some(pathext) = std::env::var_os("PATHEXT") {
                let exts = parse_pathext(&pathext.to_string_lossy());
                if !exts.is_empty() {
                    search.extensions = exts;
                }
            }
        }

        search
    }

    /// Build from a raw `PATH`-style value. Empty entries are skipped.
    pub fn from_path_var(path_var: Option<&OsStr>) -> Self {
        let dirs = path_var
            .map(|v| {
                std::env::split_paths(v)
                    .filter(|p| !p.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default();
        Self::new(dirs)
    }

    /// Replace the extension list (e.g. `[".EXE", ".CMD"]`).
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Locate `name` and return the full path of the first match.
    ///
    /// A name containing a directory component is checked as-is instead of
    /// being searched for.
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        let as_path = Path::new(name);
        if as_path.components().count() > 1 || as_path.is_absolute() {
            return self
                .candidate_names(name)
                .into_iter()
                .map(PathBuf::from)
                .find(|p| is_executable(p));
        }

        for dir in &self.dirs {
            for candidate in self.candidate_names(name) {
                let full = dir.join(&candidate);
                trace!(path = ?full, "probing");
                if is_executable(&full) {
                    return Some(full);
                }
            }
        }
        None
    }

    /// File names to probe for `name`: the name itself when it already
    /// carries a known extension (or none are configured), otherwise one
    /// name per extension.
    fn candidate_names(&self, name: &str) -> Vec<String> {
        if self.extensions.is_empty() || self.has_known_extension(name) {
            return vec![name.to_string()];
        }
        self.extensions
            .iter()
            .map(|ext| format!("{name}{}", ext.to_lowercase()))
            .collect()
    }

    fn has_known_extension(&self, name: &str) -> bool {
        let Some(ext) = Path::new(name).extension() else {
            return false;
        };
        let ext = format!(".{}", ext.to_string_lossy());
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
    }
}

fn parse_pathext(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s.starts_with('.') {
                s.to_string()
            } else {
                format!(".{s}")
            }
        })
        .collect()
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
