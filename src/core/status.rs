//! Asset presence reporting
//!
//! Read-only survey of the managed assets: which destinations exist,
//! their sizes, and whether the embedding archive has been extracted.

use std::path::Path;

use serde::Serialize;

use crate::core::assets::Asset;

/// Presence of a single asset on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    /// Destination file exists
    Present,
    /// Destination file is missing
    Missing,
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::Missing => write!(f, "missing"),
        }
    }
}

/// Survey entry for one asset
#[derive(Debug, Clone, Serialize)]
pub struct AssetReport {
    /// Asset name
    pub name: String,
    /// Destination path relative to the data root
    pub dest: String,
    /// Presence on disk
    pub status: AssetStatus,
    /// File size in bytes, when present
    pub size: Option<u64>,
    /// For archive assets: whether extracted members sit next to it
    pub extracted: Option<bool>,
}

/// Survey all assets under a data root
pub fn survey(data_root: &Path, assets: &[Asset]) -> Vec<AssetReport> {
    assets
        .iter()
        .map(|asset| {
            let dest = asset.dest_under(data_root);
            let meta = std::fs::metadata(&dest).ok().filter(|m| m.is_file());

            let extracted = if asset.is_archive() {
                Some(has_extracted_members(&dest))
            } else {
                None
            };

            AssetReport {
                name: asset.name.clone(),
                dest: asset.dest.display().to_string(),
                status: if meta.is_some() {
                    AssetStatus::Present
                } else {
                    AssetStatus::Missing
                },
                size: meta.map(|m| m.len()),
                extracted,
            }
        })
        .collect()
}

/// True when any run is still needed to satisfy the layout
pub fn anything_missing(reports: &[AssetReport]) -> bool {
    reports.iter().any(|r| r.status == AssetStatus::Missing)
}

/// Whether files other than the archive itself sit in its directory
fn has_extracted_members(archive_path: &Path) -> bool {
    let Some(parent) = archive_path.parent() else {
        return false;
    };
    let Ok(entries) = std::fs::read_dir(parent) else {
        return false;
    };

    entries
        .filter_map(Result::ok)
        .any(|entry| entry.path() != archive_path)
}
