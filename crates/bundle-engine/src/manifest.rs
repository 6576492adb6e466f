//! # Bundle Manifests
//!
//! A manifest names a bundle and lists the remote assets it is made of.
//! Retrieval is a collaborator behind [`ManifestSource`]; the downloader
//! only consumes the decoded record and never branches on transport
//! details.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::ManifestError;

/// Decoded manifest record. Immutable once constructed; owned by the
/// orchestration invocation that fetched it.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub id: String,
    pub kind: String,
    pub version: u32,
    /// Remote asset locations, in reporting order.
    pub assets: Vec<String>,
}

/// Source of decoded manifests, keyed by an opaque identifier.
#[async_trait]
pub trait ManifestSource: Send + Sync {
    async fn fetch(&self, identifier: &str) -> Result<Manifest, ManifestError>;
}

/// Manifest source that resolves identifiers against a base URL and decodes
/// the JSON response body.
#[derive(Debug, Clone)]
pub struct HttpManifestSource {
    client: Client,
    base_url: Url,
}

impl HttpManifestSource {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    fn manifest_url(&self, identifier: &str) -> Result<Url, ManifestError> {
        self.base_url
            .join(identifier)
            .map_err(|_| ManifestError::InvalidUrl(identifier.to_string()))
    }
}

#[async_trait]
impl ManifestSource for HttpManifestSource {
    async fn fetch(&self, identifier: &str) -> Result<Manifest, ManifestError> {
        if identifier.trim().is_empty() {
            return Err(ManifestError::EmptyIdentifier);
        }

        let url = self.manifest_url(identifier)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ManifestError::HttpStatus(status));
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(ManifestError::InvalidResponse);
        }

        let manifest: Manifest = serde_json::from_slice(&body)?;
        debug!(
            identifier,
            id = %manifest.id,
            assets = manifest.assets.len(),
            "decoded manifest"
        );
        Ok(manifest)
    }
}
