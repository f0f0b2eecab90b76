// tests/internal_error.rs

use app_launcher::report_internal_error;
use launcher_test_utils::fakes::RecordingConsole;

#[tokio::test]
async fn internal_error_exits_one_and_pauses() {
    let mut console = RecordingConsole::new();
    let err = anyhow::anyhow!("Configuration error: `interpreters` must list at least one name");

    let code = report_internal_error(&mut console, &err).await;

    assert_eq!(code, 1);
    assert_eq!(console.pauses(), 1);
    // The diagnostic goes to stderr, not through the console lines.
    assert!(console.lines().is_empty());
}
