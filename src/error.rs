//! Error types for qaprep
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Download errors
#[derive(Error, Debug)]
pub enum DownloadError {
    /// Network error
    #[error("Network error downloading '{url}': {error}")]
    NetworkError { url: String, error: String },

    /// Checksum verification failed
    #[error("Checksum verification failed for '{file}'")]
    ChecksumFailed { file: String },

    /// Download produced an empty file
    #[error("Download of '{url}' produced an empty file")]
    EmptyDownload { url: String },

    /// Destination file missing after a completed attempt
    #[error("Destination '{path}' missing after download attempt")]
    NotConfirmed { path: PathBuf },

    /// IO error
    #[error("IO error for '{path}': {error}")]
    IoError { path: PathBuf, error: String },

    /// Max retries exceeded
    #[error("Download failed after {retries} retries: {url}")]
    MaxRetriesExceeded { url: String, retries: u32 },
}

/// Archive extraction errors
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Archive cannot be opened or parsed
    #[error("Failed to read archive '{path}': {error}")]
    InvalidArchive { path: PathBuf, error: String },

    /// Archive member path would escape the target directory
    #[error("Archive '{archive}' contains unsafe member path '{member}'")]
    UnsafeMemberPath { archive: PathBuf, member: String },

    /// IO error while writing a member
    #[error("IO error extracting to '{path}': {error}")]
    IoError { path: PathBuf, error: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },
}

/// Language model install errors
#[derive(Error, Debug)]
pub enum InstallError {
    /// Interpreter missing at install time
    #[error("Cannot run '{interpreter}': {error}")]
    InterpreterUnavailable { interpreter: String, error: String },

    /// Installer exited with a failure status
    #[error("Model install for '{model}' failed with {status}")]
    InstallFailed { model: String, status: String },
}

/// Top-level qaprep error type
#[derive(Error, Debug)]
pub enum QaprepError {
    /// Required external tool missing
    #[error("Required tool '{tool}' not found in PATH. {suggestion}")]
    MissingTool { tool: String, suggestion: String },

    /// Download error
    #[error("Download error: {0}")]
    Download(#[from] DownloadError),

    /// Extraction error
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    /// Install error
    #[error("Install error: {0}")]
    Install(#[from] InstallError),

    /// Generic error
    #[error("{0}")]
    Generic(String),
}
