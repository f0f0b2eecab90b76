// src/main.rs

use app_launcher::console::{self, StdConsole};
use app_launcher::{cli, logging, report_internal_error, run};
use tracing::warn;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Code page first: nothing may be printed before it is switched.
    let utf8 = console::enable_utf8_output();

    match run_main(utf8).await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            let code = report_internal_error(&mut StdConsole, &err).await;
            std::process::exit(code);
        }
    }
}

async fn run_main(utf8: anyhow::Result<()>) -> anyhow::Result<i32> {
    let args = cli::parse();
    logging::init_logging()?;
    if let Err(err) = utf8 {
        warn!(error = %err, "could not switch console to UTF-8");
    }
    Ok(run(args).await?)
}
