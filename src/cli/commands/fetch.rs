//! CLI implementation for `qaprep fetch`
//!
//! Runs the whole preparation sequence: prerequisite check, directory
//! creation, the download-if-absent loop, and the spaCy model install.
//! The first confirmed failure aborts the run.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::{
    create_download_bar, create_spinner, format_size, print_info, print_success, print_warning,
};
use crate::config::defaults;
use crate::core::assets::default_assets;
use crate::core::doctor::ensure_prerequisites;
use crate::core::fetch::{ensure_layout, fetch_asset, AssetOutcome, FetchOptions};
use crate::core::install::install_spacy_model;
use crate::infra::download::{DownloadManager, ProgressCallback};

/// Execute the fetch command
pub async fn execute(data_root: &Path, force: bool, skip_model: bool) -> Result<()> {
    // Prerequisites come first: a missing tool must abort before any
    // directory or network side effect. The checks cover the install
    // step, so --skip-model waives them.
    if !skip_model {
        let spinner = create_spinner("Checking prerequisites...");
        let check = ensure_prerequisites();
        spinner.finish_and_clear();
        check?;
    }

    ensure_layout(data_root).with_context(|| "Failed to create output directories")?;

    let manager = DownloadManager::new();
    let options = FetchOptions { force };
    let assets = default_assets();

    let mut downloaded = 0usize;
    let mut skipped = 0usize;

    for asset in &assets {
        let bar = create_download_bar(0);
        let pb = bar.clone();
        let progress: ProgressCallback = Box::new(move |done, total| {
            if total > 0 && pb.length() != Some(total) {
                pb.set_length(total);
            }
            pb.set_position(done);
        });

        let outcome = fetch_asset(&manager, data_root, asset, &options, Some(progress))
            .await
            .with_context(|| format!("Failed to fetch '{}'", asset.name));

        bar.finish_and_clear();

        match outcome? {
            AssetOutcome::Skipped => {
                print_info(&format!("{} already exists, skipping", asset.dest.display()));
                skipped += 1;
            }
            AssetOutcome::Downloaded(fetched) => {
                print_success(&format!(
                    "Downloaded {} ({})",
                    fetched.path.display(),
                    format_size(fetched.size)
                ));
                if let Some(stats) = &fetched.extracted {
                    print_success(&format!(
                        "Extracted {} file(s) ({})",
                        stats.files,
                        format_size(stats.bytes)
                    ));
                }
                downloaded += 1;
            }
        }
    }

    if skip_model {
        print_warning("Skipping spaCy model install (--skip-model)");
    } else {
        print_info(&format!(
            "Installing spaCy model '{}'...",
            defaults::SPACY_MODEL
        ));
        install_spacy_model().with_context(|| "spaCy model install failed")?;
        print_success(&format!("Installed spaCy model '{}'", defaults::SPACY_MODEL));
    }

    if downloaded == 0 {
        print_success(&format!(
            "Nothing to download ({skipped} asset(s) already present)"
        ));
    } else {
        print_success(&format!(
            "Fetched {downloaded} asset(s), skipped {skipped}"
        ));
    }

    Ok(())
}
