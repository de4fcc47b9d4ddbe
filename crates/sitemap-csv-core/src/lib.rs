//! # sitemap-csv-core
//!
//! Core functionality for sitemap-csv: discover every page URL referenced by a
//! sitemap hierarchy and export the deduplicated set as CSV.
//!
//! ## Architecture
//!
//! The crate is a short pipeline:
//!
//! - **Fetching**: [`Fetcher`] retrieves raw document bytes over HTTP(S),
//!   optionally against a custom trust root
//! - **Parsing**: [`sitemap::parse_document`] turns bytes into a
//!   [`SitemapDocument`] (index or url set)
//! - **Traversal**: [`SitemapWalker`] follows nested sitemaps depth-first,
//!   fetching each sitemap URL at most once
//! - **Post-processing**: [`transform::strip_domain`] optionally reduces URLs to
//!   path, query, and fragment
//! - **Export**: [`export::to_table`] / [`export::write_table`] produce a sorted,
//!   single-column CSV
//!
//! ## Quick Start
//!
//! ```no_run
//! use sitemap_csv_core::{Config, Fetcher, collect_urls, export};
//! use std::path::Path;
//!
//! # async fn example() -> sitemap_csv_core::Result<()> {
//! let config = Config::load()?;
//! let fetcher = Fetcher::from_config(&config.fetch)?;
//!
//! let urls = collect_urls("https://example.com/sitemap.xml", &fetcher).await?;
//! export::write_table(&urls, Path::new("sitemap_urls.csv"))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, Error>`]. Traversal is fail-fast: the
//! first fetch, parse, or format error aborts the walk.

use std::collections::BTreeSet;

/// Configuration loading and defaults
pub mod config;
/// Error types and result aliases
pub mod error;
/// CSV export of collected URLs
pub mod export;
/// HTTP fetching of sitemap documents
pub mod fetcher;
/// Sitemap document parsing and location classification
pub mod sitemap;
/// URL post-processing
pub mod transform;
/// Recursive sitemap traversal
pub mod walker;

/// A deduplicated set of URLs.
pub type UrlSet = BTreeSet<String>;

// Re-export commonly used types
pub use config::{Config, FetchConfig, OutputConfig};
pub use error::{Error, Result};
pub use fetcher::{FetchBytes, Fetcher};
pub use sitemap::{LocationKind, SitemapDocument, is_xml_reference};
pub use walker::{SitemapWalker, WalkReport, collect_urls};
