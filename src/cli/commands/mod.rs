//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod clean;
pub mod doctor;
pub mod fetch;
pub mod status;

use std::path::Path;

use anyhow::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download datasets and embeddings, then install the spaCy model
    Fetch {
        /// Force re-download even if files exist
        #[arg(short, long)]
        force: bool,

        /// Skip the spaCy model install step
        #[arg(long)]
        skip_model: bool,
    },

    /// Check system dependencies
    Doctor,

    /// Show which assets are present on disk
    Status,

    /// Remove downloaded datasets and embeddings
    Clean,
}

impl Commands {
    /// Execute the command
    pub async fn run(self, data_root: &Path) -> Result<()> {
        match self {
            Self::Fetch { force, skip_model } => fetch::execute(data_root, force, skip_model).await,
            Self::Doctor => doctor::execute().await,
            Self::Status => status::execute(data_root).await,
            Self::Clean => clean::execute(data_root).await,
        }
    }
}
