//! spaCy language model installation
//!
//! The preprocessing pipeline tokenizes with spaCy, so the fetch run
//! ends by installing the English model through the interpreter's
//! module-run mode. Installer output is passed through untouched.
//! Unlike the shell script this replaces, a non-zero exit here fails
//! the run.

use std::process::Command;

use crate::config::defaults;
use crate::error::InstallError;

/// Arguments passed to the interpreter for a model install
pub fn install_args(model: &str) -> Vec<String> {
    vec![
        "-m".to_string(),
        "spacy".to_string(),
        "download".to_string(),
        model.to_string(),
    ]
}

/// Install a spaCy model using a specific interpreter
pub fn install_model_with(interpreter: &str, model: &str) -> Result<(), InstallError> {
    let status = Command::new(interpreter)
        .args(install_args(model))
        .status()
        .map_err(|e| InstallError::InterpreterUnavailable {
            interpreter: interpreter.to_string(),
            error: e.to_string(),
        })?;

    if !status.success() {
        return Err(InstallError::InstallFailed {
            model: model.to_string(),
            status: status.to_string(),
        });
    }

    Ok(())
}

/// Install the configured English model with the configured interpreter
pub fn install_spacy_model() -> Result<(), InstallError> {
    install_model_with(defaults::PYTHON_INTERPRETER, defaults::SPACY_MODEL)
}
