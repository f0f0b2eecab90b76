#![allow(dead_code)]

use std::path::PathBuf;

use app_launcher::config::LauncherConfig;
use app_launcher::launcher::LaunchPlan;
use app_launcher::locate::SearchPath;

/// Builder for `LauncherConfig` to simplify test setup.
pub struct LauncherConfigBuilder {
    config: LauncherConfig,
}

impl LauncherConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: LauncherConfig::default(),
        }
    }

    pub fn interpreters(mut self, names: &[&str]) -> Self {
        self.config.interpreters = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn script(mut self, script: &str) -> Self {
        self.config.script = script.to_string();
        self
    }

    pub fn pause(mut self, val: bool) -> Self {
        self.config.pause = val;
        self
    }

    pub fn dependency(mut self, name: &str) -> Self {
        self.config.dependency = name.to_string();
        self
    }

    pub fn build(self) -> LauncherConfig {
        self.config
    }
}

impl Default for LauncherConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `LaunchPlan`.
///
/// Defaults to an empty search path with no extensions, so nothing is
/// found unless a directory is added.
pub struct LaunchPlanBuilder {
    base_dir: PathBuf,
    config: LauncherConfig,
    dirs: Vec<PathBuf>,
}

impl LaunchPlanBuilder {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            config: LauncherConfig::default(),
            dirs: vec![],
        }
    }

    pub fn config(mut self, config: LauncherConfig) -> Self {
        self.config = config;
        self
    }

    pub fn search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dirs.push(dir.into());
        self
    }

    pub fn build(self) -> LaunchPlan {
        let search = SearchPath::new(self.dirs).with_extensions(vec![]);
        LaunchPlan::new(self.base_dir, self.config, search)
    }
}
