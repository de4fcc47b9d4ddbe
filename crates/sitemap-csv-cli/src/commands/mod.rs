//! Command implementations for the sitemap-csv CLI

mod export;

pub use export::{ExportRequest, ExportSummary, execute as export_urls};
