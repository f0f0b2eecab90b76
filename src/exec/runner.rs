// src/exec/runner.rs

//! Pluggable process runner.
//!
//! The launcher talks to a `ProcessRunner` instead of `tokio::process`
//! directly, so tests can replace the child with a fake that records what
//! would have been started.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::info;

use crate::errors::{LaunchError, Result};
use crate::exec::{ExitOutcome, Invocation};

/// Trait abstracting how the target program is executed.
pub trait ProcessRunner: Send {
    /// Start `invocation`, wait for it to terminate and report its exit.
    fn run(
        &mut self,
        invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<ExitOutcome>> + Send + '_>>;
}

/// Runner used in production: spawns a real child that inherits the
/// console's stdin/stdout/stderr.
#[derive(Debug, Clone, Default)]
pub struct RealProcessRunner;

impl ProcessRunner for RealProcessRunner {
    fn run(
        &mut self,
        invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<ExitOutcome>> + Send + '_>> {
        Box::pin(async move {
            info!(
                program = ?invocation.program,
                args = ?invocation.args,
                cwd = ?invocation.cwd,
                "starting target program"
            );

            let mut child = Command::new(&invocation.program)
                .args(&invocation.args)
                .current_dir(&invocation.cwd)
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .spawn()
                .map_err(|source| LaunchError::Spawn {
                    program: invocation.program.clone(),
                    source,
                })?;

            let status = child.wait().await?;
            let outcome = ExitOutcome::from(status);

            info!(
                exit_code = outcome.code,
                success = outcome.success(),
                "target program exited"
            );

            Ok(outcome)
        })
    }
}
