//! Update and list drivers.
//!
//! Each command runs its steps strictly in order and stops at the first
//! failure. Progress goes to `out`; the caller renders any error.

use std::io::Write;

use flowpush_core::document::WorkflowDocument;
use flowpush_core::verify::verify;
use flowpush_n8n::api::{N8nApi, RemoteWorkflow, WorkflowList};

use crate::cli::Cli;
use crate::config::PublisherConfig;
use crate::error::{CliError, CliResult};
use crate::report;

/// Build the n8n client described by `config`.
pub fn build_api(config: &PublisherConfig) -> CliResult<N8nApi> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build().map_err(CliError::Client)?;
    Ok(N8nApi::with_client(client, &config.api_url, &config.api_key))
}

/// Dispatch to the command selected on the command line.
pub async fn run(cli: &Cli, config: &PublisherConfig, out: &mut impl Write) -> CliResult<()> {
    let api = build_api(config)?;
    if cli.list {
        list(&api, out).await?;
    } else {
        update(config, &api, out).await?;
    }
    Ok(())
}

/// Push the local document to the configured workflow and verify the result.
pub async fn update(
    config: &PublisherConfig,
    api: &N8nApi,
    out: &mut impl Write,
) -> CliResult<RemoteWorkflow> {
    report::write_step(out, 1, "Reading local workflow file")?;
    let document = WorkflowDocument::load(&config.workflow_file)?;

    report::write_step(out, 2, "Building update request body")?;
    let body = document.to_update();

    report::write_step(out, 3, "Sending update request to n8n")?;
    tracing::info!(
        workflow_id = %config.workflow_id,
        api_url = %api.api_url(),
        node_count = body.nodes.len(),
        "Publishing workflow",
    );
    let workflow = api
        .update_workflow(&config.workflow_id, &body)
        .await
        .map_err(CliError::Update)?;

    report::write_success(out, &workflow)?;

    let checks = verify(&workflow.nodes, &config.verify);
    let warnings = checks.iter().filter(|c| c.is_warning()).count();
    if warnings > 0 {
        tracing::warn!(warnings, "Workflow verification reported warnings");
    }
    report::write_checks(out, &checks)?;

    Ok(workflow)
}

/// Print the workflows visible to the API key.
pub async fn list(api: &N8nApi, out: &mut impl Write) -> CliResult<WorkflowList> {
    let workflows = api.list_workflows().await.map_err(CliError::List)?;
    tracing::info!(count = workflows.data.len(), "Fetched workflow listing");
    report::write_listing(out, &workflows)?;
    Ok(workflows)
}
