//! CLI error handling with exit codes.
//!
//! Every failure is reported as a single line on stderr whose prefix names the
//! stage that failed, followed by a non-zero exit.
//!
//! | Code | Stage | Message prefix |
//! |------|-------|----------------|
//! | 0 | Success | `Wrote <N> unique URLs to <path>` on stdout |
//! | 1 | `Traversal` | `Failed to parse sitemap:` |
//! | 1 | `Write` | `Failed to write CSV:` |
//! | 2 | `Usage` | `Invalid usage:` |
//!
//! Clap's own argument errors also exit with code 2.

use std::fmt;
use std::process::ExitCode;

/// The stage of an export that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Invalid arguments or configuration, detected before any fetch.
    Usage,
    /// Fetching, parsing, or walking the sitemap hierarchy.
    Traversal,
    /// Writing the CSV output.
    Write,
}

impl Stage {
    /// Get the exit code for this stage.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Usage => 2,
            Self::Traversal | Self::Write => 1,
        }
    }

    /// Message prefix printed before the underlying error.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Usage => "Invalid usage",
            Self::Traversal => "Failed to parse sitemap",
            Self::Write => "Failed to write CSV",
        }
    }
}

/// A CLI error tagged with the stage that produced it.
///
/// Wraps an `anyhow::Error` so the full chain stays available for
/// `--verbose` logging while `Display` stays a single line.
#[derive(Debug)]
pub struct CliError {
    /// The stage that failed.
    pub stage: Stage,
    /// The underlying error with full context.
    pub source: anyhow::Error,
}

impl CliError {
    /// Create a new CLI error for an explicit stage.
    pub fn new(stage: Stage, source: impl Into<anyhow::Error>) -> Self {
        Self {
            stage,
            source: source.into(),
        }
    }

    /// Create a usage error.
    pub fn usage(source: impl Into<anyhow::Error>) -> Self {
        Self::new(Stage::Usage, source)
    }

    /// Create a traversal error.
    pub fn traversal(source: impl Into<anyhow::Error>) -> Self {
        Self::new(Stage::Traversal, source)
    }

    /// Create a write error.
    pub fn write(source: impl Into<anyhow::Error>) -> Self {
        Self::new(Stage::Write, source)
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.stage.exit_code()
    }

    /// Create an `ExitCode` from this error.
    #[must_use]
    pub fn as_exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_code())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.stage.prefix(), self.source)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use sitemap_csv_core::Error;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Stage::Usage.exit_code(), 2);
        assert_eq!(Stage::Traversal.exit_code(), 1);
        assert_eq!(Stage::Write.exit_code(), 1);
    }

    #[test]
    fn test_traversal_message() {
        let err = CliError::traversal(Error::HttpStatus {
            url: "https://example.com/sitemap.xml".to_string(),
            status: 404,
        });
        assert_eq!(
            err.to_string(),
            "Failed to parse sitemap: Fetch error: HTTP 404 for 'https://example.com/sitemap.xml'"
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_write_message() {
        let err = CliError::write(Error::Write("out.csv: permission denied".to_string()));
        assert_eq!(
            err.to_string(),
            "Failed to write CSV: Write error: out.csv: permission denied"
        );
    }

    #[test]
    fn test_usage_message() {
        let err = CliError::usage(anyhow!("sitemap URL must not be blank"));
        assert_eq!(
            err.to_string(),
            "Invalid usage: sitemap URL must not be blank"
        );
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_error_chain_is_preserved() {
        let err = CliError::traversal(Error::Parse("bad".to_string()));
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("Parse error: bad"));
    }
}
