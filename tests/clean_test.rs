//! Integration tests for `qaprep clean`

mod common;

use common::TestProject;
use std::process::Command;

/// Helper to run qaprep clean against a test data root
fn run_clean(project: &TestProject, args: &[&str]) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_qaprep"));
    cmd.arg("--data-dir").arg(project.path());
    cmd.arg("clean");
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute qaprep clean")
}

/// Test: clean removes both data directories
#[test]
fn test_clean_removes_data_dirs() {
    let project = TestProject::new();
    project.create_full_layout();

    let output = run_clean(&project, &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "clean failed: {stdout}");
    assert!(stdout.contains("Cleaned downloaded data"), "{stdout}");
    assert!(!project.exists("boolq"));
    assert!(!project.exists("glove"));
}

/// Test: clean leaves unrelated files in the data root alone
#[test]
fn test_clean_leaves_unrelated_files() {
    let project = TestProject::new();
    project.create_full_layout();
    project.create_file("notes.txt", b"keep me");

    let output = run_clean(&project, &[]);

    assert!(output.status.success());
    assert!(project.exists("notes.txt"));
}

/// Test: clean on an empty root reports nothing to do
#[test]
fn test_clean_empty_root() {
    let project = TestProject::new();

    let output = run_clean(&project, &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Nothing to clean"), "{stdout}");
}

/// Test: clean is idempotent
#[test]
fn test_clean_twice() {
    let project = TestProject::new();
    project.create_full_layout();

    assert!(run_clean(&project, &[]).status.success());
    let second = run_clean(&project, &[]);

    assert!(second.status.success());
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(stdout.contains("Nothing to clean"), "{stdout}");
}

/// Test: --quiet suppresses clean output
#[test]
fn test_clean_quiet() {
    let project = TestProject::new();
    project.create_full_layout();

    let output = run_clean(&project, &["--quiet"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!project.exists("boolq"));
}
