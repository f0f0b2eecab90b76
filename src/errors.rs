// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("{dependency} not found on PATH (tried: {})", .tried.join(", "))]
    InterpreterNotFound {
        dependency: String,
        tried: Vec<String>,
    },

    #[error("cannot determine launcher directory: {0}")]
    LauncherDir(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("failed to start {program:?}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, LaunchError>;
