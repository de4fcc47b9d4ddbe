//! sitemap-csv CLI - export every URL in a sitemap hierarchy to CSV
//!
//! The binary in `main.rs` is a thin wrapper around [`run`]; everything else
//! lives here so integration tests and other front-ends can reuse it.

use clap::Parser;
use sitemap_csv_core::Config;
use std::process::ExitCode;
use tracing::debug;

pub mod cli;
pub mod commands;
pub mod error;
mod utils;

use crate::cli::Cli;
use crate::commands::{ExportRequest, ExportSummary};
use crate::error::CliError;
use crate::utils::initialize_logging;

/// Execute the sitemap-csv CLI with the current process arguments.
///
/// Prints the summary line on success and a single error line on failure;
/// the returned exit code reflects which.
pub async fn run() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = initialize_logging(&cli) {
        eprintln!("Failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    match execute(&cli).await {
        Ok(summary) => {
            debug!(
                sitemaps = summary.sitemap_count,
                urls = summary.url_count,
                "Traversal summary"
            );
            println!(
                "Wrote {} unique URLs to {}",
                summary.url_count,
                summary.output.display()
            );
            ExitCode::SUCCESS
        },
        Err(err) => {
            debug!(error = ?err.source, "Export failed");
            eprintln!("{err}");
            err.as_exit_code()
        },
    }
}

/// Load configuration, resolve the request, and run the export.
///
/// # Errors
///
/// Returns a [`CliError`] tagged with the stage that failed.
pub async fn execute(cli: &Cli) -> Result<ExportSummary, CliError> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .map_err(CliError::usage)?;

    let request = ExportRequest::resolve(cli, config)?;
    debug!(?request, "Resolved export request");
    commands::export_urls(&request).await
}
