//! # Bundle Engine
//!
//! A library for materializing named bundles of remote assets into a local
//! path-addressed cache.
//!
//! ## Features
//!
//! - Deterministic URL to local path derivation under a single cache root
//! - Existence-checked get-or-fetch with an idempotent cache-hit fast path
//! - Batch downloads driven by a bundle manifest, with per-asset progress,
//!   not-found, and completion callbacks
//! - Injectable store providers (filesystem or in-memory)

pub mod cache;
pub mod config;
pub mod downloader;
pub mod error;
pub mod events;
pub mod fetch;
pub mod manifest;
pub mod path_map;
pub mod store;

pub use cache::CacheManager;
pub use config::{EngineConfig, EngineConfigBuilder};
pub use downloader::{BundleDownloader, BundleSummary};
pub use error::{AssetError, EngineError, ManifestError};
pub use events::{BundleObserver, NoopObserver};
pub use fetch::{AssetFetcher, HttpFetcher, create_client};
pub use manifest::{HttpManifestSource, Manifest, ManifestSource};
pub use path_map::{PathMapper, display_name};
pub use store::{FsStore, MemStore, StoreProvider};
