//! # Store Provider
//!
//! Trait implemented by every asset store. Presence of an entry is entirely
//! represented by a regular file at the derived path under the cache root;
//! there is no sidecar index.

use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::AssetError;

/// A store for asset bytes keyed by derived local paths.
#[async_trait]
pub trait StoreProvider: Send + Sync {
    /// True iff a regular file exists at the path. Never errors; unreadable
    /// paths are treated as absent.
    async fn exists(&self, path: &Path) -> bool;

    /// Read the full contents of a stored asset.
    async fn read(&self, path: &Path) -> Result<Bytes, AssetError>;

    /// Store the full byte buffer at the path, creating any missing parent
    /// directories. Overwrites in place.
    async fn write(&self, path: &Path, data: Bytes) -> Result<(), AssetError>;

    /// Remove every entry under the cache root. Partial clears are possible
    /// and are not rolled back.
    async fn clear_all(&self) -> Result<(), AssetError>;

    /// Total size in bytes of regular files directly under the cache root.
    /// Entries in nested subdirectories are not counted.
    async fn total_size(&self) -> Result<u64, AssetError>;
}
