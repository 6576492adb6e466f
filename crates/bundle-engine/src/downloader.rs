//! # Bundle Downloader
//!
//! Drives a manifest's asset list through the cache, strictly sequentially,
//! emitting lifecycle callbacks as assets resolve or fail. A single asset's
//! failure never aborts the batch; only a manifest fetch failure is fatal
//! to an invocation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::CacheManager;
use crate::error::{AssetError, EngineError};
use crate::events::BundleObserver;
use crate::manifest::ManifestSource;
use crate::path_map::display_name;

/// Final per-invocation accounting. `attempted == cached + failed` holds,
/// and `attempted` equals the manifest's asset count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleSummary {
    pub attempted: usize,
    pub cached: usize,
    pub failed: usize,
}

pub struct BundleDownloader {
    manifests: Arc<dyn ManifestSource>,
    cache: CacheManager,
}

impl BundleDownloader {
    pub fn new(manifests: Arc<dyn ManifestSource>, cache: CacheManager) -> Self {
        Self { manifests, cache }
    }

    /// The cache this downloader materializes assets into.
    pub fn cache(&self) -> &CacheManager {
        &self.cache
    }

    /// Download every asset of the named bundle into the local cache.
    ///
    /// Fails only when the manifest itself cannot be obtained; in that case
    /// the error callback fires once and no per-asset processing happens.
    /// Otherwise each asset is processed in manifest order, its outcome is
    /// counted and reported, and the summary is returned after the
    /// completion callback.
    pub async fn run(
        &self,
        identifier: &str,
        observer: &dyn BundleObserver,
    ) -> Result<BundleSummary, EngineError> {
        info!(identifier, "fetching bundle manifest");

        let manifest = match self.manifests.fetch(identifier).await {
            Ok(manifest) => manifest,
            Err(e) => {
                warn!(identifier, error = %e, "manifest fetch failed");
                let error = EngineError::Manifest(e);
                observer.on_error(&error);
                return Err(error);
            }
        };

        observer.on_manifest_loaded(&manifest);

        let total = manifest.assets.len();
        let mut attempted = 0usize;
        let mut cached = 0usize;
        let mut failed = 0usize;

        for location in &manifest.assets {
            attempted += 1;

            match self.cache.get_asset(location).await {
                Ok(path) => {
                    cached += 1;
                    let name = display_name(location);
                    debug!(location, path = ?path, "asset ready");
                    observer.on_progress(total, cached, &name);
                }
                Err(e) => {
                    failed += 1;
                    match e {
                        AssetError::InvalidLocation(_) | AssetError::DownloadFailed(_) => {
                            warn!(location, error = %e, "asset not found");
                            observer.on_asset_not_found(location);
                        }
                        other => {
                            warn!(location, error = %other, "asset retrieval failed");
                            observer.on_error(&EngineError::Asset(other));
                        }
                    }
                }
            }
        }

        info!(
            bundle = %manifest.id,
            attempted,
            cached,
            failed,
            "bundle download complete"
        );
        observer.on_complete(attempted, cached, failed);

        Ok(BundleSummary {
            attempted,
            cached,
            failed,
        })
    }
}
