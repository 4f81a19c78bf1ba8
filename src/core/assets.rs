//! Managed assets and data layout
//!
//! The asset list is fixed: the two BoolQ JSON-lines splits and the
//! GloVe embedding archive. Order matters; the fetch loop consumes the
//! list exactly once per run.

use std::path::{Path, PathBuf};

use crate::config::{defaults, urls};
use crate::infra::extract::is_archive;

/// A single downloadable asset
#[derive(Debug, Clone)]
pub struct Asset {
    /// Short name used in output and summaries
    pub name: String,
    /// Source URL
    pub url: String,
    /// Destination path relative to the data root
    pub dest: PathBuf,
    /// Expected SHA256 checksum, when one is pinned
    pub sha256: Option<String>,
}

impl Asset {
    /// Create an asset without a pinned checksum
    pub fn new(name: &str, url: &str, dest: impl Into<PathBuf>) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            dest: dest.into(),
            sha256: None,
        }
    }

    /// Absolute destination path under a data root
    pub fn dest_under(&self, data_root: &Path) -> PathBuf {
        data_root.join(&self.dest)
    }

    /// Whether the destination name calls for extraction after download
    pub fn is_archive(&self) -> bool {
        is_archive(&self.dest)
    }
}

/// The fixed download set, in run order
pub fn default_assets() -> Vec<Asset> {
    vec![
        Asset::new(
            "boolq-train",
            urls::BOOLQ_TRAIN,
            PathBuf::from(defaults::DATASET_SUBDIR).join("train.jsonl"),
        ),
        Asset::new(
            "boolq-dev",
            urls::BOOLQ_DEV,
            PathBuf::from(defaults::DATASET_SUBDIR).join("dev.jsonl"),
        ),
        Asset::new(
            "glove-840b-300d",
            urls::GLOVE_840B_300D,
            PathBuf::from(defaults::EMBEDDING_SUBDIR).join("glove.840B.300d.zip"),
        ),
    ]
}

/// Output directories created before any download runs
pub fn layout_dirs() -> Vec<PathBuf> {
    vec![
        PathBuf::from(defaults::DATASET_SUBDIR),
        PathBuf::from(defaults::EMBEDDING_SUBDIR),
    ]
}
