// src/config/mod.rs

//! Configuration loading and validation for the launcher.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load `launcher.toml` from the launcher directory (`loader.rs`).
//! - Validate basic invariants (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{CONFIG_FILE_NAME, load_and_validate, load_from_path, load_or_default};
pub use model::LauncherConfig;
pub use validate::validate_config;
