//! CLI implementation for `qaprep clean`
//!
//! Removes the downloaded dataset and embedding directories.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::{format_size, print_detail, print_success};
use crate::core::clean::{clean_data, has_data};

/// Execute the clean command
pub async fn execute(data_root: &Path) -> Result<()> {
    if !has_data(data_root) {
        print_success("Nothing to clean");
        return Ok(());
    }

    let result = clean_data(data_root).with_context(|| "Failed to clean downloaded data")?;

    if result.removed.is_empty() {
        print_success("Nothing to clean");
    } else {
        print_success(&format!(
            "Cleaned downloaded data ({} freed):",
            format_size(result.bytes_freed)
        ));
        for dir in &result.removed {
            print_detail(&format!("Removed {dir}/"));
        }
    }

    Ok(())
}
