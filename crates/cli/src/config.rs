use std::path::PathBuf;
use std::time::Duration;

use flowpush_core::verify::VerifyRules;

/// Default n8n base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:5678";

/// Workflow updated when `N8N_WORKFLOW_ID` is not set.
pub const DEFAULT_WORKFLOW_ID: &str = "RKfT3GgZKppFkc7oKfuaN";

/// Local document read when `N8N_WORKFLOW_FILE` is not set.
pub const DEFAULT_WORKFLOW_FILE: &str = "workflow/document_to_notion_workflow.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("N8N_API_KEY not set")]
    MissingApiKey,

    #[error("{var} has an invalid value: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Publisher configuration loaded once at startup.
#[derive(Debug, Clone)]
pub struct PublisherConfig {
    /// n8n base URL (default: `http://localhost:5678`).
    pub api_url: String,
    /// Static API key sent as `X-N8N-API-KEY`.
    pub api_key: String,
    /// Identifier of the workflow to replace.
    pub workflow_id: String,
    /// Local workflow document, relative to the working directory.
    pub workflow_file: PathBuf,
    /// Nodes inspected after a successful update.
    pub verify: VerifyRules,
    /// HTTP timeout; `None` leaves the client without one.
    pub request_timeout: Option<Duration>,
}

impl PublisherConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                                     |
    /// |----------------------------|---------------------------------------------|
    /// | `N8N_API_URL`              | `http://localhost:5678`                     |
    /// | `N8N_API_KEY`              | required                                    |
    /// | `N8N_WORKFLOW_ID`          | `RKfT3GgZKppFkc7oKfuaN`                     |
    /// | `N8N_WORKFLOW_FILE`        | `workflow/document_to_notion_workflow.json` |
    /// | `N8N_API_KEY_NODES`        | `Send to Datalab API,Get Markdown`          |
    /// | `N8N_MULTIPART_NODE`       | `Send to Datalab API`                       |
    /// | `N8N_REQUEST_TIMEOUT_SECS` | unset                                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("N8N_API_KEY").ok_or(ConfigError::MissingApiKey)?;

        let api_url = non_empty("N8N_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.into())
            .trim_end_matches('/')
            .to_string();

        let workflow_id = non_empty("N8N_WORKFLOW_ID").unwrap_or_else(|| DEFAULT_WORKFLOW_ID.into());

        let workflow_file: PathBuf = non_empty("N8N_WORKFLOW_FILE")
            .unwrap_or_else(|| DEFAULT_WORKFLOW_FILE.into())
            .into();

        let mut verify = VerifyRules::default();
        if let Some(nodes) = non_empty("N8N_API_KEY_NODES") {
            verify.api_key_nodes = nodes
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(node) = non_empty("N8N_MULTIPART_NODE") {
            verify.multipart_node = node.trim().to_string();
        }

        let request_timeout = match non_empty("N8N_REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        var: "N8N_REQUEST_TIMEOUT_SECS",
                        value: raw.clone(),
                    })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            api_url,
            api_key,
            workflow_id,
            workflow_file,
            verify,
            request_timeout,
        })
    }
}
