// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::LauncherConfig;
use crate::config::validate::validate_config;
use crate::errors::Result;

/// File name looked up in the launcher directory.
pub const CONFIG_FILE_NAME: &str = "launcher.toml";

/// Load a configuration file from a given path.
///
/// This only performs TOML deserialization; use [`load_and_validate`] for
/// the semantic checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<LauncherConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: LauncherConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run basic validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<LauncherConfig> {
    let config = load_from_path(&path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Load `launcher.toml` from `dir` if it exists, otherwise use defaults.
pub fn load_or_default(dir: &Path) -> Result<LauncherConfig> {
    let path = config_path_in(dir);
    if !path.is_file() {
        debug!(path = ?path, "no launcher config, using defaults");
        return Ok(LauncherConfig::default());
    }

    debug!(path = ?path, "loading launcher config");
    load_and_validate(&path)
}

/// Location of the config file inside the launcher directory.
pub fn config_path_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}
