//! Local workflow documents and the update request body derived from them.
//!
//! A document exported from the n8n editor carries server-assigned fields
//! (`id`, `versionId`, `active`, ...) that the update endpoint rejects.
//! [`WorkflowUpdate`] keeps only the writable subset.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Name sent when the local document does not carry one.
pub const DEFAULT_WORKFLOW_NAME: &str = "Document Analysis Workflow";

/// Execution order written into every update.
pub const EXECUTION_ORDER: &str = "v1";

/// Server-assigned fields that must never appear in an update body.
pub const READ_ONLY_FIELDS: &[&str] = &[
    "id",
    "versionId",
    "active",
    "tags",
    "meta",
    "createdAt",
    "updatedAt",
];

// ---------------------------------------------------------------------------
// Local document
// ---------------------------------------------------------------------------

/// A workflow definition as stored on disk.
///
/// Nodes are kept as raw JSON so node-type specific fields pass through
/// untouched. Unknown top-level keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowDocument {
    #[serde(default)]
    pub name: Option<String>,
    pub nodes: Vec<Value>,
    pub connections: Map<String, Value>,
}

impl WorkflowDocument {
    /// Read and parse a workflow document from `path`.
    ///
    /// Fails with [`CoreError::FileNotFound`] when the file is absent and
    /// [`CoreError::InvalidDocument`] when it is not JSON or lacks the
    /// `nodes` / `connections` keys.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        if !path.exists() {
            return Err(CoreError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let raw = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let document = Self::from_json(&raw).map_err(|source| CoreError::InvalidDocument {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            path = %path.display(),
            node_count = document.nodes.len(),
            "Loaded workflow document",
        );
        Ok(document)
    }

    /// Parse a workflow document from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Project this document onto the body accepted by the update endpoint.
    pub fn to_update(&self) -> WorkflowUpdate {
        WorkflowUpdate {
            name: self
                .name
                .clone()
                .unwrap_or_else(|| DEFAULT_WORKFLOW_NAME.to_string()),
            nodes: self.nodes.clone(),
            connections: self.connections.clone(),
            settings: WorkflowSettings::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Update request body
// ---------------------------------------------------------------------------

/// Body of `PUT /api/v1/workflows/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowUpdate {
    pub name: String,
    pub nodes: Vec<Value>,
    pub connections: Map<String, Value>,
    pub settings: WorkflowSettings,
}

/// Fixed workflow settings sent with every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSettings {
    pub execution_order: String,
    #[serde(rename = "availableInMCP")]
    pub available_in_mcp: bool,
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            execution_order: EXECUTION_ORDER.to_string(),
            available_in_mcp: true,
        }
    }
}
