//! sitemap-csv CLI - export every URL in a sitemap hierarchy to CSV
//!
//! This is the main entry point for the sitemap-csv command-line interface.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    sitemap_csv_cli::run().await
}
