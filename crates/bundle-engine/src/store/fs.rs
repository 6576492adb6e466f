//! # Filesystem Store
//!
//! Store provider backed by the local filesystem. The directory tree under
//! the cache root is the entire index: an asset is cached iff a regular
//! file exists at its derived path.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::{debug, warn};

use crate::error::AssetError;

use super::StoreProvider;

#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Create a store rooted at the given directory. The directory itself
    /// is created lazily by the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl StoreProvider for FsStore {
    async fn exists(&self, path: &Path) -> bool {
        match fs::metadata(path).await {
            Ok(meta) => meta.is_file(),
            Err(_) => false,
        }
    }

    async fn read(&self, path: &Path) -> Result<Bytes, AssetError> {
        let data = fs::read(path).await.map_err(AssetError::ReadFailed)?;
        Ok(Bytes::from(data))
    }

    async fn write(&self, path: &Path, data: Bytes) -> Result<(), AssetError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(AssetError::WriteFailed)?;
        }

        fs::write(path, &data)
            .await
            .map_err(AssetError::WriteFailed)?;

        debug!(path = ?path, size = data.len(), "stored asset");
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), AssetError> {
        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            // A missing root means there is nothing to clear.
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(AssetError::ClearFailed(e)),
        };

        let mut first_failure: Option<io::Error> = None;

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    first_failure.get_or_insert(e);
                    break;
                }
            };

            let path = entry.path();
            let removal = if path.is_dir() {
                fs::remove_dir_all(&path).await
            } else {
                fs::remove_file(&path).await
            };

            if let Err(e) = removal {
                warn!(path = ?path, error = %e, "failed to remove cache entry");
                first_failure.get_or_insert(e);
            }
        }

        match first_failure {
            Some(e) => Err(AssetError::ClearFailed(e)),
            None => {
                debug!(root = ?self.root, "cleared cache");
                Ok(())
            }
        }
    }

    async fn total_size(&self) -> Result<u64, AssetError> {
        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(AssetError::ReadFailed(e)),
        };

        let mut total = 0u64;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(AssetError::ReadFailed)?
        {
            let meta = entry.metadata().await.map_err(AssetError::ReadFailed)?;
            if meta.is_file() {
                total += meta.len();
            }
        }

        Ok(total)
    }
}
