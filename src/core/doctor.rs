//! Doctor command logic
//!
//! Checks the external tools a fetch run still shells out to and
//! reports issues with suggestions. Downloading and extraction are
//! native, so only the Python side of the pipeline is probed.

use std::process::Command;

use crate::config::defaults;
use crate::error::QaprepError;

/// Result of a single dependency check
#[derive(Debug, Clone, serde::Serialize)]
pub struct CheckResult {
    /// Name of the dependency being checked
    pub name: String,
    /// Whether the check passed
    pub passed: bool,
    /// Version if available
    pub version: Option<String>,
    /// Error message if check failed
    pub error: Option<String>,
    /// Suggestion for fixing the issue
    pub suggestion: Option<String>,
    /// Whether this is a required or optional dependency
    pub required: bool,
}

impl CheckResult {
    /// Create a passing check result
    pub fn pass(name: &str, version: Option<String>, required: bool) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            version,
            error: None,
            suggestion: None,
            required,
        }
    }

    /// Create a failing check result
    pub fn fail(name: &str, error: &str, suggestion: Option<&str>, required: bool) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            version: None,
            error: Some(error.to_string()),
            suggestion: suggestion.map(String::from),
            required,
        }
    }
}

/// Overall doctor report
#[derive(Debug, Default)]
pub struct DoctorReport {
    /// Individual check results
    pub checks: Vec<CheckResult>,
}

impl DoctorReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a check result
    pub fn add_check(&mut self, result: CheckResult) {
        self.checks.push(result);
    }

    /// Check if all required checks passed
    pub fn all_required_passed(&self) -> bool {
        self.checks.iter().filter(|c| c.required).all(|c| c.passed)
    }

    /// Check if all checks passed (including optional)
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Count passed checks
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Get all failed required checks
    pub fn failed_required(&self) -> Vec<&CheckResult> {
        self.checks
            .iter()
            .filter(|c| c.required && !c.passed)
            .collect()
    }
}

/// Probe a command's version output
pub fn check_command_available(command: &str) -> Option<String> {
    // PATH resolution first, so a broken binary and a missing one report the same way
    which::which(command).ok()?;

    Command::new(command)
        .arg("--version")
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let stderr = String::from_utf8_lossy(&output.stderr);
                let combined = format!("{stdout}{stderr}");
                extract_version(&combined)
            } else {
                None
            }
        })
}

/// Extract version string from command output
fn extract_version(output: &str) -> Option<String> {
    // Try to find version patterns like "1.2.3" or "v1.2.3"
    let version_regex = regex::Regex::new(r"v?(\d+\.\d+(?:\.\d+)?(?:-\w+)?)").ok()?;
    version_regex
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Check Python 3 interpreter availability
pub fn check_python() -> CheckResult {
    match check_command_available(defaults::PYTHON_INTERPRETER) {
        Some(version) => CheckResult::pass("Python 3", Some(version), true),
        None => CheckResult::fail(
            "Python 3",
            "python3 not found in PATH",
            Some("Install Python 3 from https://www.python.org/ or use your package manager"),
            true,
        ),
    }
}

/// Check pip availability through the interpreter's module-run mode
pub fn check_pip() -> CheckResult {
    let probe = Command::new(defaults::PYTHON_INTERPRETER)
        .args(["-m", "pip", "--version"])
        .output();

    match probe {
        Ok(output) if output.status.success() => {
            let stdout = String::from_utf8_lossy(&output.stdout).to_string();
            CheckResult::pass("pip", extract_version(&stdout), true)
        }
        _ => CheckResult::fail(
            "pip",
            "python3 -m pip is not usable",
            Some("Install pip with 'python3 -m ensurepip --upgrade'"),
            true,
        ),
    }
}

/// Run all doctor checks
pub fn run_doctor() -> DoctorReport {
    let mut report = DoctorReport::new();

    report.add_check(check_python());
    report.add_check(check_pip());

    report
}

/// Fail fast when a required tool is missing
///
/// Used by the fetch command before any directory or network side
/// effect. The error names the missing tool.
pub fn ensure_prerequisites() -> Result<(), QaprepError> {
    let report = run_doctor();

    if let Some(check) = report.failed_required().first() {
        return Err(QaprepError::MissingTool {
            tool: check.name.clone(),
            suggestion: check.suggestion.clone().unwrap_or_default(),
        });
    }

    Ok(())
}
