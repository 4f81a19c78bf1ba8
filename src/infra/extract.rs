//! Zip archive extraction
//!
//! Extracts archive members next to the archive itself, the way the
//! embedding archive is expected to unpack. Member paths are validated
//! before any write: an entry that would land outside the target
//! directory aborts the extraction.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use crate::error::ExtractError;

/// Summary of an extraction
#[derive(Debug, Default)]
pub struct ExtractStats {
    /// Number of files written
    pub files: usize,
    /// Total bytes written
    pub bytes: u64,
}

/// Recognized archive suffix
pub const ZIP_SUFFIX: &str = ".zip";

/// Check whether a destination filename calls for extraction
pub fn is_archive(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(ZIP_SUFFIX))
}

/// Extract a zip archive into a destination directory
///
/// Member paths are used as-is relative to `dest_dir`, after rejecting
/// absolute paths and parent-directory traversal.
pub fn extract_zip(archive_path: &Path, dest_dir: &Path) -> Result<ExtractStats, ExtractError> {
    let file = File::open(archive_path).map_err(|e| ExtractError::InvalidArchive {
        path: archive_path.to_path_buf(),
        error: e.to_string(),
    })?;

    let mut archive = zip::ZipArchive::new(file).map_err(|e| ExtractError::InvalidArchive {
        path: archive_path.to_path_buf(),
        error: e.to_string(),
    })?;

    fs::create_dir_all(dest_dir).map_err(|e| ExtractError::IoError {
        path: dest_dir.to_path_buf(),
        error: e.to_string(),
    })?;

    let mut stats = ExtractStats::default();

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| ExtractError::InvalidArchive {
                path: archive_path.to_path_buf(),
                error: e.to_string(),
            })?;

        // enclosed_name() is None for absolute or traversing paths
        let Some(relative_path) = entry.enclosed_name() else {
            return Err(ExtractError::UnsafeMemberPath {
                archive: archive_path.to_path_buf(),
                member: entry.name().to_string(),
            });
        };

        let out_path = dest_dir.join(relative_path);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(|e| ExtractError::IoError {
                path: out_path.clone(),
                error: e.to_string(),
            })?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ExtractError::IoError {
                path: parent.to_path_buf(),
                error: e.to_string(),
            })?;
        }

        let mut out_file = File::create(&out_path).map_err(|e| ExtractError::IoError {
            path: out_path.clone(),
            error: e.to_string(),
        })?;

        let written = io::copy(&mut entry, &mut out_file).map_err(|e| ExtractError::IoError {
            path: out_path.clone(),
            error: e.to_string(),
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                let _ = fs::set_permissions(&out_path, fs::Permissions::from_mode(mode));
            }
        }

        stats.files += 1;
        stats.bytes += written;

        tracing::debug!("Extracted {}", out_path.display());
    }

    Ok(stats)
}
