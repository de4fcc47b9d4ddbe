//! Sitemap document parsing and location classification.
//!
//! A sitemap document is either a **sitemap index** (`<sitemapindex>` with
//! `<sitemap><loc>` children pointing at more sitemaps) or a **url set**
//! (`<urlset>` with `<url><loc>` children). Dispatch is on the root element's
//! local name, so documents that omit or alias the sitemap protocol namespace
//! parse the same as well-formed ones.
//!
//! ```
//! use sitemap_csv_core::sitemap::{SitemapDocument, parse_document};
//!
//! let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url><loc> https://example.com/page1 </loc></url>
//!   <url><loc></loc></url>
//! </urlset>"#;
//!
//! let doc = parse_document(xml)?;
//! assert_eq!(
//!     doc,
//!     SitemapDocument::UrlSet(vec!["https://example.com/page1".to_string()])
//! );
//! # Ok::<(), sitemap_csv_core::Error>(())
//! ```

use crate::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::{debug, instrument};

/// A parsed sitemap document.
///
/// Each variant holds the trimmed, non-empty `loc` values of its entries in
/// document order. Entries without a `loc` (or with a blank one) are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitemapDocument {
    /// `<sitemapindex>`: locations of child sitemaps.
    Index(Vec<String>),
    /// `<urlset>`: locations of pages (or, occasionally, nested sitemaps).
    UrlSet(Vec<String>),
}

impl SitemapDocument {
    /// Locations listed by this document.
    #[must_use]
    pub fn locations(&self) -> &[String] {
        match self {
            Self::Index(locs) | Self::UrlSet(locs) => locs,
        }
    }
}

/// How a discovered location should be treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    /// Another sitemap document to descend into.
    Sitemap,
    /// A page URL to collect.
    Content,
}

/// Classify a location by its suffix.
#[must_use]
pub fn classify(location: &str) -> LocationKind {
    if is_xml_reference(location) {
        LocationKind::Sitemap
    } else {
        LocationKind::Content
    }
}

/// Whether a location looks like an XML sitemap.
///
/// True when, ignoring case and trailing `/`, the location ends in `.xml`.
///
/// ```
/// use sitemap_csv_core::sitemap::is_xml_reference;
///
/// assert!(is_xml_reference("https://x.com/sitemap.xml"));
/// assert!(is_xml_reference("https://x.com/SITEMAP.XML/"));
/// assert!(!is_xml_reference("https://x.com/page"));
/// assert!(!is_xml_reference("https://x.com/a.xml.html"));
/// ```
#[must_use]
pub fn is_xml_reference(location: &str) -> bool {
    location
        .trim_end_matches('/')
        .to_ascii_lowercase()
        .ends_with(".xml")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Root {
    Index,
    UrlSet,
}

impl Root {
    const fn entry_tag(self) -> &'static [u8] {
        match self {
            Self::Index => b"sitemap",
            Self::UrlSet => b"url",
        }
    }
}

/// Parse document bytes into a [`SitemapDocument`].
///
/// The whole document is read before the root tag is judged, so a malformed
/// document is always a [`Error::Parse`] even when its root is not a sitemap.
///
/// # Errors
///
/// - [`Error::Parse`] for malformed XML, undecodable text, no root element, or
///   more than one root element
/// - [`Error::UnsupportedFormat`] when the root is neither `sitemapindex` nor
///   `urlset`
#[instrument(skip_all, fields(len = bytes.len()))]
pub fn parse_document(bytes: &[u8]) -> Result<SitemapDocument> {
    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut depth: usize = 0;
    let mut root_tag: Option<String> = None;
    let mut root: Option<Root> = None;

    // Entry state: inside a `<url>`/`<sitemap>` child of the root, and inside
    // its first `<loc>`.
    let mut in_entry = false;
    let mut in_loc = false;
    let mut loc_text = String::new();
    let mut entry_loc: Option<String> = None;

    let mut locations = Vec::new();

    loop {
        let event = reader.read_event_into(&mut buf).map_err(|e| {
            Error::Parse(format!(
                "XML parse error at position {}: {e}",
                reader.error_position()
            ))
        })?;

        match event {
            Event::Start(e) => {
                let name = e.local_name();
                let name = name.as_ref();
                if depth == 0 {
                    if root_tag.is_some() {
                        return Err(Error::Parse(
                            "document has more than one root element".to_string(),
                        ));
                    }
                    root = root_kind(name);
                    root_tag = Some(String::from_utf8_lossy(name).into_owned());
                } else if depth == 1 && root.is_some_and(|r| r.entry_tag() == name) {
                    in_entry = true;
                    entry_loc = None;
                } else if depth == 2 && in_entry && name == b"loc" && entry_loc.is_none() {
                    in_loc = true;
                    loc_text.clear();
                }
                depth += 1;
            },
            Event::Empty(e) => {
                let name = e.local_name();
                let name = name.as_ref();
                if depth == 0 {
                    if root_tag.is_some() {
                        return Err(Error::Parse(
                            "document has more than one root element".to_string(),
                        ));
                    }
                    root = root_kind(name);
                    root_tag = Some(String::from_utf8_lossy(name).into_owned());
                } else if depth == 2 && in_entry && name == b"loc" && entry_loc.is_none() {
                    entry_loc = Some(String::new());
                }
            },
            Event::Text(e) => {
                if in_loc {
                    let text = e.unescape().map_err(|e| Error::Parse(e.to_string()))?;
                    loc_text.push_str(&text);
                }
            },
            Event::CData(e) => {
                if in_loc {
                    let text = reader
                        .decoder()
                        .decode(&e)
                        .map_err(|e| Error::Parse(e.to_string()))?;
                    loc_text.push_str(&text);
                }
            },
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 2 && in_loc {
                    in_loc = false;
                    entry_loc = Some(std::mem::take(&mut loc_text));
                } else if depth == 1 && in_entry {
                    in_entry = false;
                    match entry_loc.take().map(|loc| loc.trim().to_string()) {
                        Some(loc) if !loc.is_empty() => locations.push(loc),
                        _ => debug!("Skipping entry without a location"),
                    }
                }
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    if depth != 0 {
        return Err(Error::Parse(
            "unexpected end of document: unclosed element".to_string(),
        ));
    }

    match (root, root_tag) {
        (Some(Root::Index), _) => Ok(SitemapDocument::Index(locations)),
        (Some(Root::UrlSet), _) => Ok(SitemapDocument::UrlSet(locations)),
        (None, Some(tag)) => Err(Error::UnsupportedFormat { tag }),
        (None, None) => Err(Error::Parse("document has no root element".to_string())),
    }
}

fn root_kind(local_name: &[u8]) -> Option<Root> {
    match local_name {
        b"sitemapindex" => Some(Root::Index),
        b"urlset" => Some(Root::UrlSet),
        _ => None,
    }
}
