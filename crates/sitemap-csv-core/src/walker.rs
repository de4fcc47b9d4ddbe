//! Recursive sitemap traversal.
//!
//! Starting from a root URL, the walker fetches and parses sitemap documents,
//! descends into every location that names another sitemap, and collects every
//! other location. A visited set, checked before each fetch, guarantees that
//! every sitemap URL is fetched at most once, so cyclic and diamond-shaped
//! sitemap graphs terminate.
//!
//! Traversal is depth-first over an explicit work stack with a single request
//! in flight. The first error of any kind aborts the walk; nothing collected
//! up to that point is returned.
//!
//! ```no_run
//! use sitemap_csv_core::{Fetcher, collect_urls};
//!
//! # async fn example() -> sitemap_csv_core::Result<()> {
//! let fetcher = Fetcher::new()?;
//! let urls = collect_urls("https://example.com/sitemap.xml", &fetcher).await?;
//! println!("Found {} URLs", urls.len());
//! # Ok(())
//! # }
//! ```

use crate::fetcher::FetchBytes;
use crate::sitemap::{LocationKind, SitemapDocument, classify, parse_document};
use crate::{Result, UrlSet};
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// Outcome of a successful traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkReport {
    /// Content URLs discovered anywhere in the hierarchy.
    pub urls: UrlSet,
    /// Sitemap URLs fetched, in visit order.
    pub sitemaps: Vec<String>,
}

/// Depth-first walker over a sitemap hierarchy.
///
/// Holds no state between walks; every call to [`SitemapWalker::walk`] starts
/// with empty visited and collected sets.
pub struct SitemapWalker<'a, F: FetchBytes + ?Sized> {
    fetcher: &'a F,
}

impl<'a, F: FetchBytes + ?Sized> SitemapWalker<'a, F> {
    /// Create a walker that fetches documents through `fetcher`.
    pub const fn new(fetcher: &'a F) -> Self {
        Self { fetcher }
    }

    /// Walk the hierarchy rooted at `root_url`.
    ///
    /// # Errors
    ///
    /// Returns the first fetch, parse, or format error encountered.
    #[instrument(skip(self))]
    pub async fn walk(&self, root_url: &str) -> Result<WalkReport> {
        let mut visited: HashSet<String> = HashSet::new();
        let mut report = WalkReport::default();
        let mut pending = vec![root_url.to_string()];

        while let Some(url) = pending.pop() {
            if !visited.insert(url.clone()) {
                debug!(url = %url, "Sitemap already visited");
                continue;
            }

            debug!(url = %url, "Fetching sitemap");
            let bytes = self.fetcher.fetch_bytes(&url).await?;
            let document = parse_document(&bytes)?;
            report.sitemaps.push(url);

            // Pushed in reverse so children are visited in document order.
            match document {
                SitemapDocument::Index(locations) => {
                    debug!(children = locations.len(), "Descending into sitemap index");
                    pending.extend(locations.into_iter().rev());
                },
                SitemapDocument::UrlSet(locations) => {
                    let mut nested = Vec::new();
                    for location in locations {
                        match classify(&location) {
                            LocationKind::Sitemap => nested.push(location),
                            LocationKind::Content => {
                                report.urls.insert(location);
                            },
                        }
                    }
                    if !nested.is_empty() {
                        debug!(nested = nested.len(), "Url set references nested sitemaps");
                    }
                    pending.extend(nested.into_iter().rev());
                },
            }
        }

        info!(
            urls = report.urls.len(),
            sitemaps = report.sitemaps.len(),
            "Sitemap traversal complete"
        );
        Ok(report)
    }
}

/// Collect every content URL reachable from `root_url`.
///
/// Shorthand for `SitemapWalker::new(fetcher).walk(root_url)` that keeps only
/// the URL set.
pub async fn collect_urls<F>(root_url: &str, fetcher: &F) -> Result<UrlSet>
where
    F: FetchBytes + ?Sized,
{
    Ok(SitemapWalker::new(fetcher).walk(root_url).await?.urls)
}
