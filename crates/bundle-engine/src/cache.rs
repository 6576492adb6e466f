//! # Cache Manager
//!
//! Get-or-fetch composition over the path mapper, a store provider, and an
//! asset fetcher. A hit is served without any network activity; a miss
//! fetches, stores, and returns the same path a later hit would.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::config::EngineConfig;
use crate::error::AssetError;
use crate::fetch::{AssetFetcher, HttpFetcher};
use crate::path_map::PathMapper;
use crate::store::{FsStore, StoreProvider};

#[derive(Clone)]
pub struct CacheManager {
    mapper: PathMapper,
    store: Arc<dyn StoreProvider>,
    fetcher: Arc<dyn AssetFetcher>,
}

impl CacheManager {
    /// Compose a cache over an explicit store and fetcher. The mapper's root
    /// must be the root the store serves.
    pub fn new(
        mapper: PathMapper,
        store: Arc<dyn StoreProvider>,
        fetcher: Arc<dyn AssetFetcher>,
    ) -> Self {
        Self {
            mapper,
            store,
            fetcher,
        }
    }

    /// Build a filesystem-backed cache with an HTTP fetcher from the engine
    /// configuration.
    pub fn with_config(config: &EngineConfig) -> Result<Self, AssetError> {
        let root = config.resolved_cache_root();
        let fetcher = HttpFetcher::with_config(config)?;

        Ok(Self::new(
            PathMapper::new(&root),
            Arc::new(FsStore::new(root)),
            Arc::new(fetcher),
        ))
    }

    /// Resolve an asset to its local path, fetching and storing it first if
    /// it is not already present.
    ///
    /// Idempotent: once a call has succeeded, later calls for the same
    /// location are pure local checks with no network I/O. Fetch and store
    /// failures propagate verbatim.
    pub async fn get_asset(&self, location: &str) -> Result<PathBuf, AssetError> {
        let path = self.mapper.derive(location)?;

        if self.store.exists(&path).await {
            debug!(location, path = ?path, "cache hit");
            return Ok(path);
        }

        let data = self.fetcher.fetch(location).await?;
        self.store.write(&path, data).await?;

        debug!(location, path = ?path, "cache miss, asset stored");
        Ok(path)
    }

    /// Whether the asset is already present locally.
    pub async fn is_cached(&self, location: &str) -> Result<bool, AssetError> {
        let path = self.mapper.derive(location)?;
        Ok(self.store.exists(&path).await)
    }

    /// The asset's local path if it is already present, without fetching.
    pub async fn cached_path(&self, location: &str) -> Result<Option<PathBuf>, AssetError> {
        let path = self.mapper.derive(location)?;
        if self.store.exists(&path).await {
            Ok(Some(path))
        } else {
            Ok(None)
        }
    }

    /// Remove every cached entry.
    pub async fn clear(&self) -> Result<(), AssetError> {
        self.store.clear_all().await
    }

    /// Total size in bytes of entries directly under the cache root.
    pub async fn total_size(&self) -> Result<u64, AssetError> {
        self.store.total_size().await
    }
}
