use crate::config::FetchConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::{Certificate, Client};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// Source of raw sitemap document bytes.
///
/// The walker only ever needs "give me the body at this URL", so it depends on
/// this trait rather than on [`Fetcher`] directly. Tests substitute an
/// in-memory map.
#[async_trait]
pub trait FetchBytes: Send + Sync {
    /// Retrieve the full body at `url`.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

/// HTTP client for fetching sitemap documents
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher with default settings and the platform trust store
    pub fn new() -> Result<Self> {
        Self::from_config(&FetchConfig::default())
    }

    /// Creates a fetcher with a custom request timeout (primarily for tests)
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let config = FetchConfig {
            timeout_secs: timeout.as_secs().max(1),
            ..FetchConfig::default()
        };
        let client = base_builder(&config).timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Creates a fetcher from configuration.
    ///
    /// When `config.ca_bundle` is set, the bundle's certificates become the
    /// only trust roots; built-in roots are disabled.
    pub fn from_config(config: &FetchConfig) -> Result<Self> {
        let mut builder = base_builder(config);

        if let Some(bundle) = &config.ca_bundle {
            let roots = load_trust_root(bundle)?;
            debug!(
                bundle = %bundle.display(),
                certificates = roots.len(),
                "Using custom trust root"
            );
            builder = builder.tls_built_in_root_certs(false);
            for cert in roots {
                builder = builder.add_root_certificate(cert);
            }
        }

        let client = builder.build()?;
        Ok(Self { client })
    }

    /// Fetches a URL and returns the raw response body.
    ///
    /// Any non-success status is an error; the body of an error response is
    /// discarded.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            debug!(status = status.as_u16(), "Non-success response");
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "Fetched document");
        Ok(body.to_vec())
    }
}

#[async_trait]
impl FetchBytes for Fetcher {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.fetch(url).await
    }
}

fn base_builder(config: &FetchConfig) -> reqwest::ClientBuilder {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
        .gzip(true)
        .brotli(true)
}

/// Read a PEM bundle into certificates, rejecting files that contain none.
fn load_trust_root(path: &Path) -> Result<Vec<Certificate>> {
    let pem = std::fs::read(path).map_err(|e| {
        Error::Config(format!(
            "Failed to read certificate bundle {}: {e}",
            path.display()
        ))
    })?;

    let certs = Certificate::from_pem_bundle(&pem).map_err(|e| {
        Error::Config(format!(
            "Invalid certificate bundle {}: {e}",
            path.display()
        ))
    })?;

    if certs.is_empty() {
        return Err(Error::Config(format!(
            "No certificates found in {}",
            path.display()
        )));
    }

    Ok(certs)
}
