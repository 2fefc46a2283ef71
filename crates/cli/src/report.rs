//! Human-readable output written to stdout.

use std::io::{self, Write};

use flowpush_core::hints::hint_for;
use flowpush_core::verify::Check;
use flowpush_n8n::api::{N8nApiError, RemoteWorkflow, WorkflowList};

use crate::config::ConfigError;
use crate::error::CliError;

pub fn write_step(out: &mut impl Write, number: u32, description: &str) -> io::Result<()> {
    writeln!(out, "Step {number}: {description}...")
}

/// Summary printed after the server accepted an update.
pub fn write_success(out: &mut impl Write, workflow: &RemoteWorkflow) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "[SUCCESS] Workflow updated successfully!")?;
    writeln!(
        out,
        "Workflow name: {}",
        workflow.name.as_deref().unwrap_or("<unnamed>")
    )?;
    writeln!(out, "Node count: {}", workflow.nodes.len())
}

pub fn write_checks(out: &mut impl Write, checks: &[Check]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Verifying workflow configuration:")?;
    for check in checks {
        writeln!(out, "  {check}")?;
    }
    Ok(())
}

pub fn write_listing(out: &mut impl Write, list: &WorkflowList) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Available workflows:")?;
    for wf in &list.data {
        writeln!(
            out,
            "  ID: {}, Name: {}",
            wf.id_text().unwrap_or_else(|| "<none>".to_string()),
            wf.name_text().unwrap_or_else(|| "<unnamed>".to_string())
        )?;
    }
    if list.next_cursor.is_some() {
        writeln!(out, "  (more workflows available on the server)")?;
    }
    Ok(())
}

/// Lines describing a fatal error, including any troubleshooting hint.
pub fn render_failure(err: &CliError) -> Vec<String> {
    match err {
        CliError::Config(ConfigError::MissingApiKey) => vec![
            "[ERROR] N8N_API_KEY not set.".to_string(),
            "Please set it in .env file or environment variable.".to_string(),
            String::new(),
            "You can also list workflows to find the correct ID:".to_string(),
            "  flowpush --list".to_string(),
        ],
        CliError::Update(N8nApiError::Api { status, body }) => {
            let mut lines = vec![
                String::new(),
                format!("[ERROR] Update failed: {status}"),
                format!("Error message: {body}"),
            ];
            if let Some(hint) = hint_for(body) {
                lines.push(String::new());
                for (i, line) in hint.lines.iter().enumerate() {
                    if i == 0 {
                        lines.push(format!("[TIP] {line}"));
                    } else {
                        lines.push(line.to_string());
                    }
                }
            }
            lines
        }
        CliError::Update(N8nApiError::Request(e)) => {
            vec![String::new(), format!("[ERROR] An error occurred: {e}")]
        }
        CliError::List(N8nApiError::Api { status, body }) => vec![
            format!("[ERROR] Failed to list workflows: {status}"),
            format!("Error message: {body}"),
        ],
        CliError::List(N8nApiError::Request(e)) => {
            vec![format!("[ERROR] Failed to list workflows: {e}")]
        }
        other => vec![format!("[ERROR] {other}")],
    }
}

pub fn write_failure(out: &mut impl Write, err: &CliError) -> io::Result<()> {
    for line in render_failure(err) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
