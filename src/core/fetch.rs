//! Download-if-absent logic
//!
//! One asset at a time: skip when the destination already exists,
//! otherwise download, confirm the destination is really there, and
//! extract archives next to themselves. A confirmed failure aborts the
//! whole run, so the per-asset result is a hard error.

use std::path::{Path, PathBuf};

use crate::core::assets::{layout_dirs, Asset};
use crate::error::{DownloadError, QaprepError};
use crate::infra::download::{verify_checksum, DownloadManager, ProgressCallback};
use crate::infra::extract::{extract_zip, ExtractStats};
use crate::infra::filesystem;

/// Options for the fetch run
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Re-download assets even when their destinations exist
    pub force: bool,
}

/// A successfully downloaded asset
#[derive(Debug)]
pub struct FetchedAsset {
    /// Asset name
    pub name: String,
    /// Destination path
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
    /// Extraction summary, for archive assets
    pub extracted: Option<ExtractStats>,
}

/// Per-asset outcome of the download-if-absent step
#[derive(Debug)]
pub enum AssetOutcome {
    /// Asset was fetched (and extracted, when an archive)
    Downloaded(FetchedAsset),
    /// Destination already present; nothing was touched
    Skipped,
}

/// Create the dataset and embedding directories under the data root
///
/// No-op for directories that already exist.
pub fn ensure_layout(data_root: &Path) -> Result<(), QaprepError> {
    for dir in layout_dirs() {
        filesystem::create_dir_all(&data_root.join(dir))?;
    }
    Ok(())
}

/// Fetch a single asset unless its destination already exists
///
/// The skip check treats a pinned checksum as part of "exists": a
/// present file that fails verification is re-downloaded.
pub async fn fetch_asset(
    manager: &DownloadManager,
    data_root: &Path,
    asset: &Asset,
    options: &FetchOptions,
    progress: Option<ProgressCallback>,
) -> Result<AssetOutcome, QaprepError> {
    let dest = asset.dest_under(data_root);

    if !options.force && dest.is_file() {
        let still_valid = match &asset.sha256 {
            Some(expected) => verify_checksum(&dest, expected)?,
            None => true,
        };

        if still_valid {
            return Ok(AssetOutcome::Skipped);
        }

        tracing::warn!(
            "Existing {} fails checksum verification, re-downloading",
            dest.display()
        );
        std::fs::remove_file(&dest).map_err(|e| DownloadError::IoError {
            path: dest.clone(),
            error: e.to_string(),
        })?;
    }

    let result = match &asset.sha256 {
        Some(expected) => {
            manager
                .download_verified(&asset.url, &dest, expected, progress)
                .await?
        }
        None => manager.download(&asset.url, &dest, progress).await?,
    };

    // Re-check the destination after the attempt; its presence is the
    // success signal the rest of the pipeline relies on
    let confirmed = std::fs::metadata(&dest)
        .map(|m| m.is_file() && m.len() > 0)
        .unwrap_or(false);
    if !confirmed {
        return Err(QaprepError::Download(DownloadError::NotConfirmed {
            path: dest,
        }));
    }

    let extracted = if asset.is_archive() {
        let target = dest.parent().unwrap_or(data_root);
        Some(extract_zip(&dest, target)?)
    } else {
        None
    };

    Ok(AssetOutcome::Downloaded(FetchedAsset {
        name: asset.name.clone(),
        path: dest,
        size: result.size,
        extracted,
    }))
}
