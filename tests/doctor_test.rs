//! Integration tests for `qaprep doctor`
//!
//! The checks depend on the host environment, so these tests assert
//! report shape rather than pass/fail outcomes.

mod common;

use common::TestProject;
use std::process::Command;

/// Helper to run qaprep doctor
fn run_doctor(project: &TestProject, args: &[&str]) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_qaprep"));
    cmd.arg("--data-dir").arg(project.path());
    cmd.arg("doctor");
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute qaprep doctor")
}

/// Test: doctor runs and reports on the expected dependencies
#[test]
fn test_doctor_reports_dependencies() {
    let project = TestProject::new();

    let output = run_doctor(&project, &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let combined = format!("{stdout}{stderr}");

    assert!(
        combined.contains("Python 3") && combined.contains("pip"),
        "doctor should name both checks: stdout={stdout}, stderr={stderr}"
    );
}

/// Test: doctor --json emits a machine-readable report
#[test]
fn test_doctor_json_output() {
    let project = TestProject::new();

    let output = run_doctor(&project, &["--json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("doctor --json must emit valid JSON");

    let checks = parsed["checks"].as_array().expect("checks array");
    assert_eq!(checks.len(), 2);

    let names: Vec<&str> = checks
        .iter()
        .filter_map(|c| c["name"].as_str())
        .collect();
    assert!(names.contains(&"Python 3"));
    assert!(names.contains(&"pip"));

    for check in checks {
        assert!(check["required"].as_bool().unwrap());
    }
}

/// Test: doctor with no tools on PATH fails and names them
#[test]
fn test_doctor_fails_without_tools() {
    let project = TestProject::new();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_qaprep"));
    cmd.arg("--data-dir").arg(project.path());
    cmd.arg("doctor");
    cmd.env("PATH", "");
    let output = cmd.output().expect("Failed to execute qaprep doctor");

    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Python 3"), "{stdout}");
}

/// Test: quiet doctor prints nothing on a passing system
#[test]
fn test_doctor_quiet() {
    let project = TestProject::new();

    let output = run_doctor(&project, &["--quiet"]);

    // Quiet mode only emits errors
    if output.status.success() {
        assert!(output.stdout.is_empty());
    } else {
        assert!(!String::from_utf8_lossy(&output.stderr).is_empty());
    }
}
