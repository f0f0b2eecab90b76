use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use app_launcher::console::Console;
use app_launcher::errors::Result;
use app_launcher::exec::{ExitOutcome, Invocation, ProcessRunner};

/// A fake runner that:
/// - records every invocation it is asked to start
/// - immediately reports the configured exit code.
#[derive(Debug, Clone)]
pub struct FakeRunner {
    exit_code: i32,
    invocations: Arc<Mutex<Vec<Invocation>>>,
}

impl FakeRunner {
    pub fn exiting_with(exit_code: i32) -> Self {
        Self {
            exit_code,
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }
}

impl ProcessRunner for FakeRunner {
    fn run(
        &mut self,
        invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<ExitOutcome>> + Send + '_>> {
        let invocations = Arc::clone(&self.invocations);
        let code = self.exit_code;

        Box::pin(async move {
            invocations.lock().unwrap().push(invocation);
            Ok(ExitOutcome::from_code(code))
        })
    }
}

/// A console that keeps every printed line and counts pauses.
#[derive(Debug, Clone, Default)]
pub struct RecordingConsole {
    lines: Vec<String>,
    pauses: usize,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn pauses(&self) -> usize {
        self.pauses
    }

    /// All lines joined with `\n`, as they would appear on screen.
    pub fn transcript(&self) -> String {
        self.lines.join("\n")
    }
}

impl Console for RecordingConsole {
    fn line(&mut self, text: &str) -> Result<()> {
        self.lines.push(text.to_string());
        Ok(())
    }

    fn pause(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        self.pauses += 1;
        Box::pin(async { Ok(()) })
    }
}
