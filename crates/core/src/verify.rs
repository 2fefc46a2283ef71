//! Post-update sanity checks on the workflow returned by the server.
//!
//! Checks are advisory: they produce [`Check`] values for display and
//! never fail the run.

use std::fmt;

use serde_json::Value;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Nodes expected to authenticate with an `X-API-Key` header.
pub const DEFAULT_API_KEY_NODES: &[&str] = &["Send to Datalab API", "Get Markdown"];

/// Node expected to upload its payload as multipart form data.
pub const DEFAULT_MULTIPART_NODE: &str = "Send to Datalab API";

/// Header name looked up in HTTP request node parameters.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Content type value the multipart node must carry.
pub const MULTIPART_CONTENT_TYPE: &str = "multipart-form-data";

/// Parameter keys holding the body content type, in lookup order.
const CONTENT_TYPE_KEYS: [&str; 2] = ["contentType", "bodyContentType"];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which nodes to inspect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyRules {
    pub api_key_nodes: Vec<String>,
    pub multipart_node: String,
}

impl Default for VerifyRules {
    fn default() -> Self {
        Self {
            api_key_nodes: DEFAULT_API_KEY_NODES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            multipart_node: DEFAULT_MULTIPART_NODE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Warning,
}

/// Outcome of one check against one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub node: String,
    pub status: CheckStatus,
    pub message: String,
}

impl Check {
    fn ok(node: &str, message: impl Into<String>) -> Self {
        Self {
            node: node.to_string(),
            status: CheckStatus::Ok,
            message: message.into(),
        }
    }

    fn warning(node: &str, message: impl Into<String>) -> Self {
        Self {
            node: node.to_string(),
            status: CheckStatus::Warning,
            message: message.into(),
        }
    }

    pub fn is_warning(&self) -> bool {
        self.status == CheckStatus::Warning
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.status {
            CheckStatus::Ok => "OK",
            CheckStatus::Warning => "WARNING",
        };
        write!(f, "[{tag}] {}: {}", self.node, self.message)
    }
}

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

/// Run every check over `nodes`.
///
/// API-key checks come first, in node order, followed by the
/// content-type checks.
pub fn verify(nodes: &[Value], rules: &VerifyRules) -> Vec<Check> {
    let mut checks = Vec::new();

    for node in nodes {
        let Some(name) = node_name(node) else {
            continue;
        };
        if rules.api_key_nodes.iter().any(|n| n == name) {
            checks.push(check_api_key(name, node));
        }
    }

    for node in nodes {
        if node_name(node) == Some(rules.multipart_node.as_str()) {
            checks.push(check_content_type(&rules.multipart_node, node));
        }
    }

    checks
}

fn node_name(node: &Value) -> Option<&str> {
    node.get("name").and_then(Value::as_str)
}

fn check_api_key(name: &str, node: &Value) -> Check {
    let configured = node
        .pointer("/parameters/headerParameters/parameters")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter(|header| header.get("name").and_then(Value::as_str) == Some(API_KEY_HEADER))
        .any(|header| {
            header
                .get("value")
                .and_then(Value::as_str)
                .is_some_and(|v| !v.is_empty())
        });

    if configured {
        Check::ok(name, "API key configured")
    } else {
        Check::warning(name, format!("{API_KEY_HEADER} header not found"))
    }
}

fn check_content_type(name: &str, node: &Value) -> Check {
    let content_type = CONTENT_TYPE_KEYS.iter().find_map(|key| {
        node.get("parameters")
            .and_then(|p| p.get(*key))
            .and_then(Value::as_str)
            .filter(|v| !v.is_empty())
    });

    match content_type {
        Some(MULTIPART_CONTENT_TYPE) => {
            Check::ok(name, format!("{MULTIPART_CONTENT_TYPE} configured"))
        }
        Some(other) => Check::warning(name, format!("contentType is {other}")),
        None => Check::warning(name, "contentType is <unset>"),
    }
}
