//! Post-processing applied to collected URLs before export.
//!
//! These run after traversal has finished and never influence which sitemaps
//! are visited.

use crate::UrlSet;
use url::Url;

/// Reduce every URL to its path, query, and fragment.
///
/// `https://example.com/docs?q=1#top` becomes `/docs?q=1#top`. Only the scheme
/// and authority are removed; the remainder is kept exactly as written. Values
/// that do not parse as absolute URLs pass through unchanged. Because the result is a
/// set, pages that share a path on different hosts collapse into one entry.
///
/// ```
/// use sitemap_csv_core::{UrlSet, transform::strip_domain};
///
/// let urls: UrlSet = ["https://a.com/docs", "https://b.com/docs", "https://a.com/"]
///     .into_iter()
///     .map(String::from)
///     .collect();
///
/// let stripped = strip_domain(&urls);
/// assert_eq!(stripped.into_iter().collect::<Vec<_>>(), ["/", "/docs"]);
/// ```
#[must_use]
pub fn strip_domain(urls: &UrlSet) -> UrlSet {
    urls.iter().map(|url| path_and_beyond(url)).collect()
}

fn path_and_beyond(raw: &str) -> String {
    // Parsing only validates the shape; the output is sliced from `raw` so the
    // path is never re-encoded or normalized.
    match Url::parse(raw) {
        Ok(parsed) if !parsed.cannot_be_a_base() => {},
        _ => return raw.to_string(),
    }
    let Some((_, after_scheme)) = raw.split_once("://") else {
        return raw.to_string();
    };

    let rest = after_scheme
        .find(['/', '?', '#'])
        .map_or("", |end| &after_scheme[end..]);
    if rest.starts_with('/') {
        rest.to_string()
    } else {
        format!("/{rest}")
    }
}
