//! Error types and handling for sitemap-csv-core operations.
//!
//! Every failure detected during a traversal aborts the whole operation, so
//! the error type is flat: one variant per failure class, each carrying enough
//! context to print a single human-readable line at the entry point.
//!
//! ## Error Categories
//!
//! - **Fetch Errors**: DNS, connection, TLS, timeout, non-success HTTP status
//! - **Parse Errors**: malformed XML, invalid encoding, missing root element
//! - **Format Errors**: a well-formed document that is not a sitemap
//! - **Write Errors**: the CSV destination could not be created or written
//! - **Configuration Errors**: bad config file or unreadable trust root
//!
//! ```rust
//! use sitemap_csv_core::Error;
//!
//! let err = Error::UnsupportedFormat { tag: "rss".to_string() };
//! assert_eq!(err.category(), "unsupported_format");
//! assert!(!err.is_fetch_error());
//! ```

use thiserror::Error;

/// The main error type for sitemap-csv-core operations.
///
/// All public functions in sitemap-csv-core return `Result<T, Error>`.
/// `Display` provides the user-facing message; the source chain is kept
/// for `Debug` output and `--verbose` logging.
#[derive(Error, Debug)]
pub enum Error {
    /// Network operation failed.
    ///
    /// Covers name resolution, refused or timed-out connections, and TLS
    /// handshake failures including certificate validation. The underlying
    /// `reqwest::Error` is preserved.
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("Fetch error: HTTP {status} for '{url}'")]
    HttpStatus {
        /// URL that was requested.
        url: String,
        /// Status code returned by the server.
        status: u16,
    },

    /// The document could not be parsed as XML.
    ///
    /// ## Common Causes
    ///
    /// - Mismatched or unclosed tags
    /// - Bytes that are not valid UTF-8
    /// - An empty body (no root element)
    #[error("Parse error: {0}")]
    Parse(String),

    /// The document parsed, but its root element is neither `sitemapindex`
    /// nor `urlset`.
    #[error("Unsupported sitemap root tag: {tag}")]
    UnsupportedFormat {
        /// The offending root tag, namespace prefix stripped.
        tag: String,
    },

    /// The CSV output could not be written.
    #[error("Write error: {0}")]
    Write(String),

    /// Configuration is invalid or inaccessible.
    ///
    /// Also used for a trust-root bundle that cannot be read or contains no
    /// usable certificates.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Write(err.to_string())
    }
}

impl Error {
    /// Whether this error came from the transport rather than the document.
    #[must_use]
    pub const fn is_fetch_error(&self) -> bool {
        matches!(self, Self::Fetch(_) | Self::HttpStatus { .. })
    }

    /// Get the error category as a string identifier.
    ///
    /// Useful as a structured field in log events:
    ///
    /// ```rust
    /// use sitemap_csv_core::Error;
    ///
    /// let err = Error::Parse("unexpected end of input".to_string());
    /// tracing::error!(category = err.category(), "{err}");
    /// ```
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Fetch(_) | Self::HttpStatus { .. } => "fetch",
            Self::Parse(_) => "parse",
            Self::UnsupportedFormat { .. } => "unsupported_format",
            Self::Write(_) => "write",
            Self::Config(_) => "config",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
