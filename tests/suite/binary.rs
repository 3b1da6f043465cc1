//! The `snippets` binary shows every failure exactly once.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use snippets_types::FAILURE_MESSAGE;

fn run_snippets(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_snippets"))
        .args(args)
        .env("HOME", home)
        .env("SNIPPETS_DELAY_MS", "0")
        .env_remove("RUST_LOG")
        .env_remove("SNIPPETS_DEMO")
        .output()
        .expect("run snippets")
}

/// Occurrences of `needle` across stdout and stderr.
fn occurrences(output: &Output, needle: &str) -> usize {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    stdout.matches(needle).count() + stderr.matches(needle).count()
}

#[test]
fn handled_chain_failures_are_shown_once() {
    let home = tempfile::tempdir().unwrap();
    for demo in ["chain", "await"] {
        let output = run_snippets(home.path(), &[demo, "--fail"]);
        assert!(output.status.success(), "{demo}: {output:?}");
        assert_eq!(occurrences(&output, FAILURE_MESSAGE), 1, "{demo}: {output:?}");
    }
}

#[test]
fn failed_join_is_shown_once_and_exits_non_zero() {
    let home = tempfile::tempdir().unwrap();
    let output = run_snippets(home.path(), &["join", "--fail"]);

    assert_eq!(output.status.code(), Some(1), "{output:?}");
    assert_eq!(occurrences(&output, FAILURE_MESSAGE), 1, "{output:?}");
    assert!(String::from_utf8_lossy(&output.stdout).contains("error: Promise 失败！"));
}

#[test]
fn successful_join_exits_zero() {
    let home = tempfile::tempdir().unwrap();
    let output = run_snippets(home.path(), &["join"]);

    assert!(output.status.success(), "{output:?}");
    assert_eq!(occurrences(&output, FAILURE_MESSAGE), 0);
}

#[test]
fn malformed_config_warns_once() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join(".snippets");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[producer\ndelay_ms = ").unwrap();

    let output = run_snippets(home.path(), &["features"]);

    assert!(output.status.success(), "{output:?}");
    assert_eq!(occurrences(&output, "Failed to parse config"), 1, "{output:?}");
}
