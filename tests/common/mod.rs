//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use tempfile::TempDir;

/// Test data-root context
///
/// Creates a temporary directory serving as the data root and provides
/// utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory for the test data root
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test data root in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test data root
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file under the data root
    pub fn create_file(&self, name: &str, content: &[u8]) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file or directory exists under the data root
    pub fn exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Create the complete asset layout with placeholder content
    pub fn create_full_layout(&self) {
        self.create_file("boolq/train.jsonl", b"{\"question\": \"is this a test\"}\n");
        self.create_file("boolq/dev.jsonl", b"{\"question\": \"is this dev\"}\n");
        self.create_file("glove/glove.840B.300d.zip", b"PK\x05\x06placeholder");
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}
