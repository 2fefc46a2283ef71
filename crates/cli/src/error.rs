use flowpush_core::error::CoreError;
use flowpush_n8n::api::N8nApiError;

use crate::config::ConfigError;

/// Every way a run can end unsuccessfully.
///
/// Each variant is fatal; [`crate::report::render_failure`] turns it into
/// the lines shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] CoreError),

    /// The update request failed or was rejected.
    #[error("Update failed: {0}")]
    Update(#[source] N8nApiError),

    /// The listing request failed or was rejected.
    #[error("Failed to list workflows: {0}")]
    List(#[source] N8nApiError),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Writing the report to stdout failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
