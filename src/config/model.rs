// src/config/model.rs

use serde::Deserialize;

/// Launcher configuration as read from `launcher.toml`.
///
/// ```toml
/// interpreters = ["python"]
/// script = "main.py"
/// pause = true
/// dependency = "Python"
/// ```
///
/// Every key is optional; an absent file behaves exactly like the
/// defaults above.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LauncherConfig {
    /// Interpreter names (or paths) tried in order against `PATH`.
    #[serde(default = "default_interpreters")]
    pub interpreters: Vec<String>,

    /// Target program, relative to the launcher directory.
    #[serde(default = "default_script")]
    pub script: String,

    /// Wait for acknowledgement before the launcher exits.
    #[serde(default = "default_pause")]
    pub pause: bool,

    /// Human-readable name of the interpreter, used in the not-found error.
    #[serde(default = "default_dependency")]
    pub dependency: String,
}

fn default_interpreters() -> Vec<String> {
    vec!["python".to_string()]
}

fn default_script() -> String {
    "main.py".to_string()
}

fn default_pause() -> bool {
    true
}

fn default_dependency() -> String {
    "Python".to_string()
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            interpreters: default_interpreters(),
            script: default_script(),
            pause: default_pause(),
            dependency: default_dependency(),
        }
    }
}
