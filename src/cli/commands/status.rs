//! CLI command for `qaprep status`
//!
//! Read-only report of which managed assets exist under the data root.

use std::path::Path;

use anyhow::Result;

use crate::cli::output::{format_size, is_json, is_quiet, print_detail, print_info, status};
use crate::core::assets::default_assets;
use crate::core::status::{anything_missing, survey, AssetStatus};

/// Execute the status command
pub async fn execute(data_root: &Path) -> Result<()> {
    let assets = default_assets();
    let reports = survey(data_root, &assets);

    if is_json() {
        let json_result = serde_json::json!({
            "data_root": data_root.display().to_string(),
            "complete": !anything_missing(&reports),
            "assets": reports,
        });
        println!("{}", serde_json::to_string_pretty(&json_result).unwrap_or_default());
        return Ok(());
    }

    if is_quiet() {
        return Ok(());
    }

    print_info(&format!("Data root: {}", data_root.display()));
    println!();

    for report in &reports {
        match report.status {
            AssetStatus::Present => {
                let size_str = report
                    .size
                    .map(|s| format!(" ({})", format_size(s)))
                    .unwrap_or_default();
                println!("  {} {}{size_str}", status::SUCCESS, report.dest);
                if let Some(extracted) = report.extracted {
                    if extracted {
                        print_detail("extracted");
                    } else {
                        print_detail("not extracted");
                    }
                }
            }
            AssetStatus::Missing => {
                println!("  {} {} ({})", status::ERROR, report.dest, report.status);
            }
        }
    }

    println!();
    if anything_missing(&reports) {
        print_info("Run 'qaprep fetch' to download missing assets.");
    } else {
        print_info("All assets present.");
    }

    Ok(())
}
