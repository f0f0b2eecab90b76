// src/launcher.rs

//! The launch sequence: find the interpreter, run the target program from
//! the launcher directory, report how it ended, pause.
//!
//! Process spawning and console I/O go through [`ProcessRunner`] and
//! [`Console`], so the whole sequence runs unchanged against fakes in tests.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::LauncherConfig;
use crate::console::Console;
use crate::errors::{LaunchError, Result};
use crate::exec::{ExitOutcome, Invocation, ProcessRunner};
use crate::locate::SearchPath;

pub const NORMAL_EXIT_MESSAGE: &str = "Application closed normally.";

/// Exit status used when no interpreter could be found.
pub const NOT_FOUND_EXIT_CODE: i32 = 1;

/// Everything the launch sequence needs to know up front.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    /// Launcher directory; the child's working directory.
    pub base_dir: PathBuf,
    pub config: LauncherConfig,
    pub search: SearchPath,
}

impl LaunchPlan {
    pub fn new(base_dir: impl Into<PathBuf>, config: LauncherConfig, search: SearchPath) -> Self {
        Self {
            base_dir: base_dir.into(),
            config,
            search,
        }
    }
}

pub struct Launcher<R, C> {
    plan: LaunchPlan,
    runner: R,
    console: C,
}

impl<R: ProcessRunner, C: Console> Launcher<R, C> {
    pub fn new(plan: LaunchPlan, runner: R, console: C) -> Self {
        Self {
            plan,
            runner,
            console,
        }
    }

    /// Run the full sequence and return the launcher's own exit code.
    ///
    /// A missing interpreter is reported to the user and mapped to exit
    /// code 1; every other error is returned to the caller.
    pub async fn run(&mut self) -> Result<i32> {
        let interpreter = match resolve_interpreter(&self.plan.config, &self.plan.search) {
            Ok(path) => path,
            Err(LaunchError::InterpreterNotFound { dependency, tried }) => {
                info!(?tried, "interpreter not found on PATH");
                self.console.line(&not_found_message(&dependency))?;
                self.maybe_pause().await?;
                return Ok(NOT_FOUND_EXIT_CODE);
            }
            Err(err) => return Err(err),
        };

        let invocation = build_invocation(&interpreter, &self.plan);
        let outcome = self.runner.run(invocation).await?;

        self.report(outcome)?;
        self.maybe_pause().await?;

        Ok(outcome.code)
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn report(&mut self, outcome: ExitOutcome) -> Result<()> {
        self.console.line("")?;
        if outcome.success() {
            self.console.line(NORMAL_EXIT_MESSAGE)
        } else {
            info!(exit_code = outcome.code, "target program failed");
            self.console.line(&warning_message(outcome.code))
        }
    }

    async fn maybe_pause(&mut self) -> Result<()> {
        if self.plan.config.pause {
            self.console.pause().await
        } else {
            debug!("pause disabled by config");
            Ok(())
        }
    }
}

/// Try each configured interpreter name in order against `search`.
pub fn resolve_interpreter(cfg: &LauncherConfig, search: &SearchPath) -> Result<PathBuf> {
    for name in &cfg.interpreters {
        if let Some(path) = search.find(name) {
            info!(interpreter = %name, path = ?path, "interpreter found");
            return Ok(path);
        }
        debug!(interpreter = %name, "not on search path");
    }

    Err(LaunchError::InterpreterNotFound {
        dependency: cfg.dependency.clone(),
        tried: cfg.interpreters.clone(),
    })
}

fn build_invocation(interpreter: &Path, plan: &LaunchPlan) -> Invocation {
    Invocation {
        program: interpreter.to_path_buf(),
        args: vec![plan.config.script.clone()],
        cwd: plan.base_dir.clone(),
    }
}

pub fn not_found_message(dependency: &str) -> String {
    format!(
        "[ERROR] {dependency} not found. Please install {dependency} and make sure it is on PATH."
    )
}

pub fn warning_message(code: i32) -> String {
    format!("[WARNING] script exited with code {code}.")
}
