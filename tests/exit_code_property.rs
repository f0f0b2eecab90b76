// tests/exit_code_property.rs

use app_launcher::launcher::{Launcher, NORMAL_EXIT_MESSAGE, warning_message};
use launcher_test_utils::builders::LaunchPlanBuilder;
use launcher_test_utils::fakes::{FakeRunner, RecordingConsole};
use launcher_test_utils::touch_executable;
use proptest::prelude::*;

fn run_with_child_code(code: i32) -> (i32, Vec<String>) {
    let bin = tempfile::tempdir().unwrap();
    touch_executable(&bin.path().join("python"));
    let plan = LaunchPlanBuilder::new("/srv/app").search_dir(bin.path()).build();

    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();

    rt.block_on(async {
        let mut launcher =
            Launcher::new(plan, FakeRunner::exiting_with(code), RecordingConsole::new());
        let exit = launcher.run().await.unwrap();
        (exit, launcher.console().lines().to_vec())
    })
}

proptest! {
    #[test]
    fn any_nonzero_child_code_is_relayed(code in any::<i32>().prop_filter("non-zero", |c| *c != 0)) {
        let (exit, lines) = run_with_child_code(code);

        prop_assert_eq!(exit, code);
        prop_assert_eq!(lines.len(), 2);
        prop_assert_eq!(lines[0].as_str(), "");
        prop_assert_eq!(&lines[1], &warning_message(code));
        prop_assert!(lines[1].contains(&code.to_string()));
    }
}

#[test]
fn zero_child_code_is_success() {
    let (exit, lines) = run_with_child_code(0);
    assert_eq!(exit, 0);
    assert_eq!(lines.last().map(String::as_str), Some(NORMAL_EXIT_MESSAGE));
}
