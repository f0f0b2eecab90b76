// src/lib.rs

pub mod cli;
pub mod config;
pub mod console;
pub mod errors;
pub mod exec;
pub mod launcher;
pub mod locate;
pub mod logging;
pub mod workdir;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::load_or_default;
use crate::console::{Console, StdConsole};
use crate::errors::Result;
use crate::exec::RealProcessRunner;
use crate::launcher::{LaunchPlan, Launcher};
use crate::locate::SearchPath;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - launcher directory resolution (and `cd` into it)
/// - optional `launcher.toml`
/// - a `PATH` snapshot
/// - the real process runner and console
///
/// Returns the exit code the launcher should terminate with.
pub async fn run(_args: CliArgs) -> Result<i32> {
    let base_dir = workdir::launcher_dir()?;
    workdir::enter(&base_dir)?;

    let config = load_or_default(&base_dir)?;
    debug!(?config, "effective launcher config");

    let plan = LaunchPlan::new(base_dir, config, SearchPath::from_env());
    let mut launcher = Launcher::new(plan, RealProcessRunner, StdConsole);
    launcher.run().await
}

/// Report an error that stopped the launch before a child exit code was
/// available, then pause so a double-clicked console stays readable.
///
/// Returns the exit code to terminate with.
pub async fn report_internal_error<C: Console>(console: &mut C, err: &anyhow::Error) -> i32 {
    eprintln!("launcher error: {err:?}");
    if let Err(pause_err) = console.pause().await {
        debug!(error = %pause_err, "pause after internal error failed");
    }
    1
}
