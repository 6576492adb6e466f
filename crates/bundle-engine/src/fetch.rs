//! # Asset Fetcher
//!
//! Single-asset retrieval over HTTP. A fetch succeeds only for responses in
//! the 200-299 range; no retries are performed here.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::config::EngineConfig;
use crate::error::AssetError;

/// Retrieves the bytes of a single remote asset.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<Bytes, AssetError>;
}

/// Create a reqwest Client with the provided configuration
pub fn create_client(config: &EngineConfig) -> Result<Client, AssetError> {
    let mut builder = Client::builder()
        .user_agent(&config.user_agent)
        .default_headers(config.headers.clone())
        .redirect(if config.follow_redirects {
            reqwest::redirect::Policy::limited(10)
        } else {
            reqwest::redirect::Policy::none()
        });

    if !config.timeout.is_zero() {
        builder = builder.timeout(config.timeout);
    }

    if !config.connect_timeout.is_zero() {
        builder = builder.connect_timeout(config.connect_timeout);
    }

    builder.build().map_err(AssetError::Network)
}

/// HTTP fetcher backed by a shared client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn with_config(config: &EngineConfig) -> Result<Self, AssetError> {
        Ok(Self {
            client: create_client(config)?,
        })
    }
}

#[async_trait]
impl AssetFetcher for HttpFetcher {
    async fn fetch(&self, location: &str) -> Result<Bytes, AssetError> {
        let url = Url::parse(location)
            .map_err(|_| AssetError::InvalidLocation(location.to_string()))?;

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssetError::DownloadFailed(status));
        }

        let bytes = response.bytes().await?;
        debug!(location, size = bytes.len(), "fetched asset");
        Ok(bytes)
    }
}
