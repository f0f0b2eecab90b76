// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`runner`] provides the `ProcessRunner` trait and the tokio-backed
//!   `RealProcessRunner` used in production; tests swap in a fake that
//!   records invocations and returns scripted exit codes.
//! - [`Invocation`] and [`ExitOutcome`] are the values passed across that
//!   seam.

pub mod runner;

use std::path::PathBuf;

pub use runner::{ProcessRunner, RealProcessRunner};

/// A fully resolved child process to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Absolute path of the interpreter found on the search path.
    pub program: PathBuf,
    /// Arguments passed to the interpreter (the target script).
    pub args: Vec<String>,
    /// Working directory for the child.
    pub cwd: PathBuf,
}

/// How the child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    pub code: i32,
}

impl ExitOutcome {
    pub fn from_code(code: i32) -> Self {
        Self { code }
    }

    pub fn success(&self) -> bool {
        self.code == 0
    }
}

impl From<std::process::ExitStatus> for ExitOutcome {
    fn from(status: std::process::ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self { code };
        }

        // Only reachable on Unix: terminated by a signal.
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(sig) = status.signal() {
                return Self { code: 128 + sig };
            }
        }

        Self { code: 1 }
    }
}
