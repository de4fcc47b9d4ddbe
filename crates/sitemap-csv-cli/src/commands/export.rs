//! Export command: walk a sitemap hierarchy and write its URLs to CSV.

use anyhow::anyhow;
use sitemap_csv_core::{Config, FetchConfig, Fetcher, SitemapWalker, export, transform};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::error::CliError;

/// Fully resolved export settings: CLI flags layered over configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Root sitemap URL, trimmed.
    pub sitemap: String,
    /// CSV destination.
    pub output: PathBuf,
    /// Fetcher settings, including the trust root.
    pub fetch: FetchConfig,
    /// Whether to strip scheme and host before export.
    pub strip_domain: bool,
}

impl ExportRequest {
    /// Merge CLI flags over loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns a usage error when the sitemap URL is blank.
    pub fn resolve(cli: &Cli, config: Config) -> Result<Self, CliError> {
        let sitemap = cli.sitemap.trim();
        if sitemap.is_empty() {
            return Err(CliError::usage(anyhow!("sitemap URL must not be blank")));
        }

        Ok(Self {
            sitemap: sitemap.to_string(),
            output: cli.output.clone().unwrap_or(config.output.path),
            fetch: config.fetch.with_trust_root(cli.cert_file.clone()),
            strip_domain: cli.strip_domain || config.output.strip_domain,
        })
    }
}

/// What a successful export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of rows written (unique URLs).
    pub url_count: usize,
    /// Number of sitemap documents fetched.
    pub sitemap_count: usize,
    /// Where the CSV was written.
    pub output: PathBuf,
}

/// Run an export.
///
/// The CSV is only written after the whole traversal succeeds, so a failed
/// traversal leaves no output file behind.
///
/// # Errors
///
/// Returns a traversal error for fetch, parse, format, or trust-root failures,
/// and a write error when the CSV cannot be written.
pub async fn execute(request: &ExportRequest) -> Result<ExportSummary, CliError> {
    let fetcher = Fetcher::from_config(&request.fetch).map_err(CliError::traversal)?;
    let report = SitemapWalker::new(&fetcher)
        .walk(&request.sitemap)
        .await
        .map_err(|e| {
            debug!(category = e.category(), "Traversal failed");
            CliError::traversal(e)
        })?;

    let urls = if request.strip_domain {
        let stripped = transform::strip_domain(&report.urls);
        debug!(
            before = report.urls.len(),
            after = stripped.len(),
            "Stripped scheme and host"
        );
        stripped
    } else {
        report.urls
    };

    export::write_table(&urls, &request.output).map_err(CliError::write)?;
    info!(
        urls = urls.len(),
        output = %request.output.display(),
        "Export complete"
    );

    Ok(ExportSummary {
        url_count: urls.len(),
        sitemap_count: report.sitemaps.len(),
        output: request.output.clone(),
    })
}
