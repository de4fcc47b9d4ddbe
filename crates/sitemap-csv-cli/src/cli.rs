//! # CLI Structure and Argument Parsing
//!
//! `sitemap-csv` takes one positional argument, the root sitemap URL, and
//! writes every page URL found beneath it to a CSV file.
//!
//! ```bash
//! sitemap-csv https://example.com/sitemap.xml
//! sitemap-csv https://example.com/sitemap.xml -o links.csv --strip-domain
//! sitemap-csv https://intranet.example/sitemap.xml --cert-file corp-roots.pem
//! ```
//!
//! Flags override the optional configuration file; see
//! `sitemap_csv_core::config` for the file format.

use clap::Parser;
use sitemap_csv_core::config::{CONFIG_ENV_VAR, DEFAULT_SAMPLE_SITEMAP};
use std::path::PathBuf;

/// Main CLI structure for the `sitemap-csv` command
#[derive(Parser, Clone, Debug)]
#[command(name = "sitemap-csv")]
#[command(version)]
#[command(about = "Export every URL in a sitemap hierarchy to CSV", long_about = None)]
#[command(after_help = format!("Example:\n  sitemap-csv {DEFAULT_SAMPLE_SITEMAP} -o urls.csv"))]
pub struct Cli {
    /// URL of the root sitemap (a sitemap index or a url set)
    #[arg(value_name = "SITEMAP")]
    pub sitemap: String,

    /// Path to write CSV output (defaults to sitemap_urls.csv)
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// PEM bundle to trust instead of the platform certificate store
    #[arg(long = "cert-file", value_name = "FILE")]
    pub cert_file: Option<PathBuf>,

    /// Strip scheme and host, keeping only path, query, and fragment
    #[arg(long)]
    pub strip_domain: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Suppress warnings (only show errors)
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file (overrides autodiscovery)
    #[arg(long, value_name = "FILE", env = CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,
}
