//! Configuration management for sitemap-csv.
//!
//! Configuration is optional. When no file exists every setting falls back to
//! a built-in default, and command-line flags override whatever the file says.
//!
//! ## Lookup Order
//!
//! 1. An explicit path passed to [`Config::load_from`] (the CLI's `--config`)
//! 2. The `SITEMAP_CSV_CONFIG` environment variable
//! 3. The platform config directory (see [`Config::default_path`])
//!
//! ## Example Configuration File
//!
//! ```toml
//! [fetch]
//! timeout_secs = 20
//! ca_bundle = "/etc/ssl/certs/ca-bundle.pem"
//!
//! [output]
//! path = "links.csv"
//! strip_domain = true
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that points at an alternate configuration file.
pub const CONFIG_ENV_VAR: &str = "SITEMAP_CSV_CONFIG";

/// Browser-style `User-Agent` sent with every request.
///
/// Some hosts reject obvious bot agents outright, so the default mimics a
/// current desktop browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Default CSV destination when neither the CLI nor the config file names one.
pub const DEFAULT_OUTPUT_PATH: &str = "sitemap_urls.csv";

/// Sample root sitemap offered as a starting value by front-ends.
pub const DEFAULT_SAMPLE_SITEMAP: &str = "https://paen.com/sitemap.xml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP transport settings
    pub fetch: FetchConfig,
    /// CSV export settings
    pub output: OutputConfig,
}

/// Settings for the HTTP fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// `User-Agent` header value.
    pub user_agent: String,

    /// Per-request timeout, in seconds.
    pub timeout_secs: u64,

    /// Maximum number of redirects to follow for a single request.
    pub max_redirects: usize,

    /// PEM bundle used as the only trust root for TLS validation.
    ///
    /// When unset the platform trust store is used.
    pub ca_bundle: Option<PathBuf>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
            max_redirects: 10,
            ca_bundle: None,
        }
    }
}

impl FetchConfig {
    /// Replace the trust root when one is given, keeping the configured one otherwise.
    #[must_use]
    pub fn with_trust_root(mut self, trust_root: Option<PathBuf>) -> Self {
        if trust_root.is_some() {
            self.ca_bundle = trust_root;
        }
        self
    }
}

/// Settings for the CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Destination file.
    pub path: PathBuf,

    /// Strip scheme and host from every collected URL before export.
    pub strip_domain: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            strip_domain: false,
        }
    }
}

impl Config {
    /// Load configuration from `SITEMAP_CSV_CONFIG` or the default location.
    ///
    /// A missing file yields [`Config::default`]. A file that exists but cannot
    /// be read or parsed is an error.
    pub fn load() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::load_from(Path::new(&path));
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file.
    ///
    /// Unlike [`Config::load`], the file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        let config = toml::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse config {}: {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Platform config file location.
    ///
    /// - Linux: `~/.config/sitemap-csv/config.toml`
    /// - macOS: `~/Library/Application Support/dev.outfitter.sitemap-csv/config.toml`
    /// - Windows: `%APPDATA%\outfitter\sitemap-csv\config\config.toml`
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "outfitter", "sitemap-csv")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
