//! Troubleshooting hints for rejected workflow updates.
//!
//! The n8n API reports schema violations as free text. A few substrings
//! reliably point at the usual mistake, so they are mapped to advice.

/// Advice shown when an error body contains `needle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    /// Lower-case substring searched for in the error body.
    pub needle: &'static str,
    pub lines: &'static [&'static str],
}

/// Evaluated in order; the first match wins.
pub const HINTS: &[Hint] = &[
    Hint {
        needle: "read-only",
        lines: &[
            "This error usually means you included read-only fields.",
            "Make sure to exclude: id, versionId, active, tags, meta",
        ],
    },
    Hint {
        needle: "additional properties",
        lines: &[
            "This error means you included fields that are not allowed.",
            "Only include: name, nodes, connections, settings",
        ],
    },
];

/// Pick the hint matching an error body, ignoring case.
pub fn hint_for(body: &str) -> Option<&'static Hint> {
    let body = body.to_lowercase();
    HINTS.iter().find(|hint| body.contains(hint.needle))
}
