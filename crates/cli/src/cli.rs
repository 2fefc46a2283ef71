//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::PublisherConfig;

/// Push a local n8n workflow definition to a running n8n server.
///
/// Connection settings come from `N8N_API_URL` and `N8N_API_KEY`
/// (a `.env` file in the working directory is honoured).
#[derive(Debug, Parser)]
#[command(name = "flowpush", version)]
pub struct Cli {
    /// List remote workflows instead of updating one.
    #[arg(long)]
    pub list: bool,

    /// Local workflow document to push (overrides `N8N_WORKFLOW_FILE`).
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Target workflow identifier (overrides `N8N_WORKFLOW_ID`).
    #[arg(long, value_name = "ID")]
    pub workflow_id: Option<String>,
}

impl Cli {
    /// Apply command-line overrides on top of the environment config.
    pub fn apply_overrides(&self, config: &mut PublisherConfig) {
        if let Some(file) = &self.file {
            config.workflow_file = file.clone();
        }
        if let Some(id) = &self.workflow_id {
            config.workflow_id = id.clone();
        }
    }
}
