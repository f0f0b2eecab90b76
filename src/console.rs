// src/console.rs

//! Console output and the final acknowledgement pause.
//!
//! - [`enable_utf8_output`] switches the Windows console to code page 65001
//!   so non-ASCII output from the target program renders correctly.
//! - [`Console`] is the seam the launcher writes its messages through;
//!   [`StdConsole`] is the production implementation, tests record lines
//!   instead.

use std::future::Future;
use std::io::{IsTerminal, Write};
use std::pin::Pin;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::errors::Result;

/// UTF-8 code page identifier.
pub const UTF8_CODE_PAGE: u32 = 65001;

pub const PAUSE_PROMPT: &str = "Press Enter to continue . . .";

/// Switch console output to UTF-8. Must run before anything is printed.
///
/// The caller decides what to do with a failure: the launch still works,
/// only non-ASCII text may be garbled.
#[cfg(windows)]
pub fn enable_utf8_output() -> anyhow::Result<()> {
    use windows::Win32::System::Console::SetConsoleOutputCP;

    // SAFETY: plain Win32 call with a constant argument, no pointers involved.
    unsafe { SetConsoleOutputCP(UTF8_CODE_PAGE) }?;
    Ok(())
}

/// Switch console output to UTF-8. Must run before anything is printed.
///
/// Unix terminals take their encoding from the locale, so there is
/// nothing to do.
#[cfg(not(windows))]
pub fn enable_utf8_output() -> anyhow::Result<()> {
    Ok(())
}

/// Where the launcher's own messages go.
pub trait Console: Send {
    /// Print one line (an empty string prints a blank line).
    fn line(&mut self, text: &str) -> Result<()>;

    /// Wait for the user to acknowledge before the launcher exits.
    fn pause(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Console backed by the process's stdout and stdin.
#[derive(Debug, Clone, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn line(&mut self, text: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{text}")?;
        out.flush()?;
        Ok(())
    }

    fn pause(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            // Nobody can acknowledge a redirected or closed stdin.
            if !std::io::stdin().is_terminal() {
                debug!("stdin is not a terminal, skipping pause");
                return Ok(());
            }

            {
                let mut out = std::io::stdout().lock();
                write!(out, "{PAUSE_PROMPT}")?;
                out.flush()?;
            }

            let mut reader = BufReader::new(tokio::io::stdin());
            let mut buf = String::new();
            reader.read_line(&mut buf).await?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn utf8_switch_is_a_no_op_off_windows() {
        assert!(enable_utf8_output().is_ok());
    }
}
