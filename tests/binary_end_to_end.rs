// tests/binary_end_to_end.rs
//
// Copies the built `launcher` binary into a scratch directory next to a
// `launcher.toml` and a `main.py`, then runs it from somewhere else.

#![cfg(unix)]

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::thread;
use std::time::Duration;

use tempfile::TempDir;

const SH_CONFIG: &str = "interpreters = [\"sh\"]\ndependency = \"sh\"\n";

/// Scratch launcher directory holding a copy of the binary.
fn install(config: Option<&str>, script: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let exe = dir.path().join("launcher");
    fs::copy(env!("CARGO_BIN_EXE_launcher"), &exe).unwrap();
    if let Some(config) = config {
        fs::write(dir.path().join("launcher.toml"), config).unwrap();
    }
    fs::write(dir.path().join("main.py"), script).unwrap();
    (dir, exe)
}

fn run(exe: &Path, path_var: Option<&str>) -> Output {
    run_with_args(exe, &[], path_var)
}

fn run_with_args(exe: &Path, args: &[&str], path_var: Option<&str>) -> Output {
    let elsewhere = std::env::temp_dir();

    // A freshly copied binary can briefly fail with ETXTBSY while another
    // test thread is forking.
    for _ in 0..20 {
        let mut cmd = Command::new(exe);
        cmd.args(args)
            .current_dir(&elsewhere)
            .stdin(Stdio::null())
            .env_remove("LAUNCHER_LOG");
        if let Some(path_var) = path_var {
            cmd.env("PATH", path_var);
        }
        match cmd.output() {
            Ok(out) => return out,
            Err(e) if e.kind() == ErrorKind::ExecutableFileBusy => {
                thread::sleep(Duration::from_millis(50));
            }
            Err(e) => panic!("running launcher: {e}"),
        }
    }
    panic!("launcher binary stayed busy");
}

fn stdout_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn normal_exit_ends_with_closed_normally() {
    let (_dir, exe) = install(Some(SH_CONFIG), "echo hello from main\n");
    let out = run(&exe, None);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout_of(&out),
        "hello from main\n\nApplication closed normally.\n"
    );
}

#[test]
fn failing_child_code_becomes_launcher_code() {
    let (_dir, exe) = install(Some(SH_CONFIG), "exit 2\n");
    let out = run(&exe, None);

    assert_eq!(out.status.code(), Some(2));
    assert!(stdout_of(&out).contains("[WARNING] script exited with code 2."));
    // The warning line is the only report; no log output at the default level.
    assert_eq!(String::from_utf8_lossy(&out.stderr), "");
}

#[test]
fn working_directory_is_the_binary_directory() {
    let (dir, exe) = install(Some(SH_CONFIG), "pwd -P > cwd.txt\n");
    let out = run(&exe, None);
    assert_eq!(out.status.code(), Some(0));

    let recorded = fs::read_to_string(dir.path().join("cwd.txt")).unwrap();
    let expected = fs::canonicalize(dir.path()).unwrap();
    assert_eq!(Path::new(recorded.trim()), expected);
}

#[test]
fn missing_python_exits_one_without_running_script() {
    let (dir, exe) = install(None, "touch ran.txt\n");
    let empty = tempfile::tempdir().unwrap();
    let out = run(&exe, Some(empty.path().to_str().unwrap()));

    assert_eq!(out.status.code(), Some(1));
    let stdout = stdout_of(&out);
    assert!(stdout.contains("Python not found"), "got: {stdout}");
    assert!(!dir.path().join("ran.txt").exists());
    assert_eq!(String::from_utf8_lossy(&out.stderr), "");
}

#[test]
fn repeated_runs_produce_identical_output() {
    let (_dir, exe) = install(Some(SH_CONFIG), "echo same\n");
    let first = run(&exe, None);
    let second = run(&exe, None);

    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn invalid_config_is_an_internal_error() {
    let (_dir, exe) = install(Some("interpreters = []\n"), "exit 0\n");
    let out = run(&exe, None);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("launcher error"));
}

#[test]
fn extra_arguments_are_rejected() {
    let (_dir, exe) = install(Some(SH_CONFIG), "exit 0\n");
    let out = run_with_args(&exe, &["other.py"], None);

    assert_eq!(out.status.code(), Some(2));
}
