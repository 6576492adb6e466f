//! # Memory Store
//!
//! In-memory store provider keyed by derived paths. Mirrors the filesystem
//! store's semantics, including the non-recursive size query, and exists
//! mainly so the cache and downloader can be exercised without touching
//! disk.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::RwLock;

use crate::error::AssetError;

use super::StoreProvider;

#[derive(Debug)]
pub struct MemStore {
    root: PathBuf,
    entries: RwLock<HashMap<PathBuf, Bytes>>,
}

impl MemStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of stored entries, regardless of nesting depth.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl StoreProvider for MemStore {
    async fn exists(&self, path: &Path) -> bool {
        self.entries.read().contains_key(path)
    }

    async fn read(&self, path: &Path) -> Result<Bytes, AssetError> {
        self.entries.read().get(path).cloned().ok_or_else(|| {
            AssetError::ReadFailed(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no entry at {}", path.display()),
            ))
        })
    }

    async fn write(&self, path: &Path, data: Bytes) -> Result<(), AssetError> {
        self.entries.write().insert(path.to_path_buf(), data);
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), AssetError> {
        self.entries.write().clear();
        Ok(())
    }

    async fn total_size(&self) -> Result<u64, AssetError> {
        let entries = self.entries.read();
        let total = entries
            .iter()
            .filter(|(path, _)| path.parent() == Some(self.root.as_path()))
            .map(|(_, data)| data.len() as u64)
            .sum();
        Ok(total)
    }
}
