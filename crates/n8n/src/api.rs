//! REST API client for the n8n workflow endpoints.
//!
//! Wraps `PUT /api/v1/workflows/{id}` and `GET /api/v1/workflows` using
//! [`reqwest`]. Every request carries the static API key header.

use serde::Deserialize;
use serde_json::Value;

use flowpush_core::document::WorkflowUpdate;

/// Header n8n reads the API key from.
pub const API_KEY_HEADER: &str = "X-N8N-API-KEY";

/// HTTP client for a single n8n instance.
pub struct N8nApi {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

/// Workflow as returned by the server after an update.
///
/// Only the fields the report reads are decoded; everything else the
/// server sends (`id`, `active`, timestamps, ...) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteWorkflow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nodes: Vec<Value>,
}

/// One entry of the workflow listing.
///
/// `id` and `name` stay raw JSON and are printed as received.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowSummary {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub name: Value,
}

impl WorkflowSummary {
    pub fn id_text(&self) -> Option<String> {
        field_text(&self.id)
    }

    pub fn name_text(&self) -> Option<String> {
        field_text(&self.name)
    }
}

/// Strings come back bare, other non-null values as JSON text.
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Response body of `GET /api/v1/workflows`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowList {
    #[serde(default)]
    pub data: Vec<WorkflowSummary>,
    /// Present when more pages are available.
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Errors from the n8n REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum N8nApiError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// n8n returned a non-2xx status code.
    #[error("n8n API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body, surfaced to the user verbatim.
        body: String,
    },
}

impl N8nApi {
    /// Create a new API client for an n8n instance.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://localhost:5678`.
    /// * `api_key` - Value sent in the `X-N8N-API-KEY` header.
    pub fn new(api_url: &str, api_key: &str) -> Self {
        Self::with_client(reqwest::Client::new(), api_url, api_key)
    }

    /// Create an API client reusing a pre-configured [`reqwest::Client`]
    /// (e.g. one built with a request timeout).
    pub fn with_client(client: reqwest::Client, api_url: &str, api_key: &str) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Replace the definition of an existing workflow.
    ///
    /// Sends `PUT /api/v1/workflows/{workflow_id}` and returns the
    /// server's canonical copy of the updated workflow.
    pub async fn update_workflow(
        &self,
        workflow_id: &str,
        update: &WorkflowUpdate,
    ) -> Result<RemoteWorkflow, N8nApiError> {
        let url = format!("{}/api/v1/workflows/{}", self.api_url, workflow_id);
        tracing::debug!(url = %url, node_count = update.nodes.len(), "Updating workflow");

        let response = self
            .client
            .put(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(update)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// List workflows visible to the API key.
    ///
    /// Sends `GET /api/v1/workflows`. Only the first page is fetched.
    pub async fn list_workflows(&self) -> Result<WorkflowList, N8nApiError> {
        let url = format!("{}/api/v1/workflows", self.api_url);
        tracing::debug!(url = %url, "Listing workflows");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`N8nApiError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, N8nApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), "n8n rejected request");
            return Err(N8nApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, N8nApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
