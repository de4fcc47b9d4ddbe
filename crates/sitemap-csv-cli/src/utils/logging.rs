//! Logging initialization and configuration.
//!
//! This module handles setting up the tracing subscriber based on CLI flags.
//! Log output always goes to stderr so stdout carries only the summary line.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::Cli;

/// Pick the maximum log level for the given flags.
pub const fn log_level(cli: &Cli) -> Level {
    if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    }
}

/// Initialize the logging subsystem based on CLI flags.
///
/// # Errors
///
/// Returns an error if the global tracing subscriber cannot be set.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(cli))
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["sitemap-csv", "https://example.com/sitemap.xml"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_default_level_is_warn() {
        assert_eq!(log_level(&parse(&[])), Level::WARN);
    }

    #[test]
    fn test_verbose_enables_debug() {
        assert_eq!(log_level(&parse(&["--verbose"])), Level::DEBUG);
    }

    #[test]
    fn test_quiet_limits_to_errors() {
        assert_eq!(log_level(&parse(&["-q"])), Level::ERROR);
    }
}
