//! `flowpush` -- push a local n8n workflow definition to a running server.
//!
//! Reads the workflow document, strips server-assigned fields, replaces
//! the remote workflow via the n8n public API, and prints a few sanity
//! checks on the result. `--list` prints the remote workflows instead.
//!
//! # Environment variables
//!
//! | Variable                   | Required | Default                                     |
//! |----------------------------|----------|---------------------------------------------|
//! | `N8N_API_KEY`              | yes      | --                                          |
//! | `N8N_API_URL`              | no       | `http://localhost:5678`                     |
//! | `N8N_WORKFLOW_ID`          | no       | `RKfT3GgZKppFkc7oKfuaN`                     |
//! | `N8N_WORKFLOW_FILE`        | no       | `workflow/document_to_notion_workflow.json` |
//! | `N8N_API_KEY_NODES`        | no       | `Send to Datalab API,Get Markdown`          |
//! | `N8N_MULTIPART_NODE`       | no       | `Send to Datalab API`                       |
//! | `N8N_REQUEST_TIMEOUT_SECS` | no       | --                                          |

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flowpush::cli::Cli;
use flowpush::commands;
use flowpush::config::PublisherConfig;
use flowpush::error::CliError;
use flowpush::report;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flowpush=warn,flowpush_n8n=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match PublisherConfig::from_env() {
        Ok(mut config) => {
            cli.apply_overrides(&mut config);
            commands::run(&cli, &config, &mut out).await
        }
        Err(e) => Err(CliError::from(e)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %err, "flowpush failed");
            if let Err(e) = report::write_failure(&mut out, &err) {
                tracing::error!(error = %e, "Failed to write error report");
            }
            if let Err(e) = out.flush() {
                tracing::error!(error = %e, "Failed to flush error report");
            }
            ExitCode::FAILURE
        }
    }
}
