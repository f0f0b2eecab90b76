// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! The launcher takes no behavioral flags or positional arguments; `clap`
//! only supplies `--help` / `--version` and rejects anything else with a
//! usage error.

use clap::Parser;

/// Command-line arguments for `launcher`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "launcher",
    version,
    about = "Run main.py with Python from this program's directory and report how it exited.",
    long_about = None
)]
pub struct CliArgs {}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
