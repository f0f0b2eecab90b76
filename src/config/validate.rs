// src/config/validate.rs

use crate::config::model::LauncherConfig;
use crate::errors::{LaunchError, Result};

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - there is at least one interpreter candidate and none is blank
/// - `script` is not blank
/// - `dependency` is not blank
pub fn validate_config(cfg: &LauncherConfig) -> Result<()> {
    validate_interpreters(cfg)?;

    if cfg.script.trim().is_empty() {
        return Err(LaunchError::Config("`script` must not be empty".to_string()));
    }

    if cfg.dependency.trim().is_empty() {
        return Err(LaunchError::Config(
            "`dependency` must not be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_interpreters(cfg: &LauncherConfig) -> Result<()> {
    if cfg.interpreters.is_empty() {
        return Err(LaunchError::Config(
            "`interpreters` must list at least one name".to_string(),
        ));
    }
    if let Some(pos) = cfg.interpreters.iter().position(|s| s.trim().is_empty()) {
        return Err(LaunchError::Config(format!(
            "`interpreters[{pos}]` is empty"
        )));
    }
    Ok(())
}
