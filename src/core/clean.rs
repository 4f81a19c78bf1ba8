//! Clean logic
//!
//! Removes the downloaded data directories. The next fetch run starts
//! from scratch.

use std::path::Path;

use crate::config::defaults;
use crate::error::FilesystemError;
use crate::infra::filesystem;

/// Directories removed during clean, relative to the data root
pub const CLEAN_DIRECTORIES: &[&str] = &[defaults::DATASET_SUBDIR, defaults::EMBEDDING_SUBDIR];

/// Result of clean operation
#[derive(Debug, Default)]
pub struct CleanResult {
    /// Directories that were removed
    pub removed: Vec<String>,
    /// Directories that didn't exist (skipped)
    pub skipped: Vec<String>,
    /// Bytes freed by the removal
    pub bytes_freed: u64,
}

/// Remove downloaded data under a data root
pub fn clean_data(data_root: &Path) -> Result<CleanResult, FilesystemError> {
    let mut result = CleanResult::default();

    for dir_name in CLEAN_DIRECTORIES {
        let dir_path = data_root.join(dir_name);

        if dir_path.exists() {
            result.bytes_freed += filesystem::dir_size(&dir_path);
            filesystem::remove_dir_all(&dir_path)?;
            result.removed.push((*dir_name).to_string());
        } else {
            result.skipped.push((*dir_name).to_string());
        }
    }

    Ok(result)
}

/// Check whether any downloaded data exists under a data root
pub fn has_data(data_root: &Path) -> bool {
    CLEAN_DIRECTORIES
        .iter()
        .any(|dir| data_root.join(dir).exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clean_removes_data_dirs() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("boolq")).unwrap();
        std::fs::write(temp.path().join("boolq/train.jsonl"), b"12345").unwrap();
        std::fs::create_dir_all(temp.path().join("glove")).unwrap();

        let result = clean_data(temp.path()).unwrap();

        assert_eq!(result.removed, vec!["boolq", "glove"]);
        assert!(result.skipped.is_empty());
        assert_eq!(result.bytes_freed, 5);
        assert!(!temp.path().join("boolq").exists());
        assert!(!temp.path().join("glove").exists());
    }

    #[test]
    fn test_clean_empty_root_skips_everything() {
        let temp = TempDir::new().unwrap();

        let result = clean_data(temp.path()).unwrap();

        assert!(result.removed.is_empty());
        assert_eq!(result.skipped, vec!["boolq", "glove"]);
        assert_eq!(result.bytes_freed, 0);
    }

    #[test]
    fn test_clean_leaves_unrelated_files() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("boolq")).unwrap();
        std::fs::write(temp.path().join("notes.txt"), b"keep me").unwrap();

        clean_data(temp.path()).unwrap();

        assert!(temp.path().join("notes.txt").exists());
    }

    #[test]
    fn test_has_data() {
        let temp = TempDir::new().unwrap();
        assert!(!has_data(temp.path()));

        std::fs::create_dir_all(temp.path().join("glove")).unwrap();
        assert!(has_data(temp.path()));
    }
}
