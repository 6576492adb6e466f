//! # Path Mapping
//!
//! Derives the local storage path for a remote asset location. The mapping
//! is pure: it parses the URL, drops scheme, host, query and fragment, and
//! re-roots the remaining path segments under the cache root, so
//! `scheme://host/a/b/c` maps to `<root>/a/b/c`. Two locations that share
//! the same path after the host collide to the same local path; this is a
//! documented limitation and is not defended against.

use std::path::{Path, PathBuf};

use url::Url;

use crate::error::AssetError;

/// Maps asset locations to paths under a fixed cache root.
#[derive(Debug, Clone)]
pub struct PathMapper {
    root: PathBuf,
}

impl PathMapper {
    /// Create a mapper rooted at the given cache directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The cache root all derived paths live under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Derive the local path for an asset location.
    ///
    /// Performs no I/O and is deterministic for a fixed root. Fails with
    /// [`AssetError::InvalidLocation`] when the input is not an absolute URL
    /// or cannot carry path segments.
    pub fn derive(&self, location: &str) -> Result<PathBuf, AssetError> {
        let url = Url::parse(location)
            .map_err(|_| AssetError::InvalidLocation(location.to_string()))?;

        let segments = url
            .path_segments()
            .ok_or_else(|| AssetError::InvalidLocation(location.to_string()))?;

        let mut path = self.root.clone();
        for segment in segments.filter(|s| !s.is_empty()) {
            path.push(segment);
        }

        Ok(path)
    }
}

/// Short display name for an asset location: the final non-empty path
/// segment, or the raw location string when no segment can be extracted.
pub fn display_name(location: &str) -> String {
    match Url::parse(location) {
        Ok(url) => url
            .path_segments()
            .and_then(|segments| segments.rev().find(|s| !s.is_empty()))
            .map(str::to_string)
            .unwrap_or_else(|| location.to_string()),
        Err(_) => location.to_string(),
    }
}
