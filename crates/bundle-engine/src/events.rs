//! # Download Lifecycle Callbacks
//!
//! Observer surface consumed by presentation or automation layers. All
//! methods are invoked from the orchestration task, in batch order; no two
//! callbacks overlap within one run.

use crate::error::EngineError;
use crate::manifest::Manifest;

/// Lifecycle callbacks for one bundle download.
///
/// Every method has a no-op default, so consumers implement only what they
/// need.
pub trait BundleObserver: Send + Sync {
    /// The manifest was fetched and decoded; asset processing starts next.
    fn on_manifest_loaded(&self, _manifest: &Manifest) {}

    /// One asset was resolved to a local path. `cached` counts successful
    /// resolutions so far out of `total`.
    fn on_progress(&self, _total: usize, _cached: usize, _display_name: &str) {}

    /// An asset was reported missing: its location was malformed or the
    /// server answered outside the success range.
    fn on_asset_not_found(&self, _location: &str) {}

    /// A failure outside the not-found cases: manifest retrieval, transport,
    /// or local storage.
    fn on_error(&self, _error: &EngineError) {}

    /// The batch finished. `attempted == cached + failed` always holds here.
    fn on_complete(&self, _attempted: usize, _cached: usize, _failed: usize) {}
}

/// Observer that ignores every callback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl BundleObserver for NoopObserver {}
