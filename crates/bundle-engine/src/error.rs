use reqwest::StatusCode;

/// Errors raised while resolving, fetching, or storing a single asset.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("invalid asset location: {0}")]
    InvalidLocation(String),

    #[error("server returned status code {0}")]
    DownloadFailed(StatusCode),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to read cached asset: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("failed to write cached asset: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("failed to clear cache: {0}")]
    ClearFailed(#[source] std::io::Error),
}

/// Errors raised by a manifest source.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("manifest identifier is empty")]
    EmptyIdentifier,

    #[error("invalid manifest URL: {0}")]
    InvalidUrl(String),

    #[error("manifest response was empty")]
    InvalidResponse,

    #[error("manifest server returned status code {0}")]
    HttpStatus(StatusCode),

    #[error("failed to decode manifest: {0}")]
    Decoding(#[from] serde_json::Error),

    #[error("network error fetching manifest: {0}")]
    Network(#[from] reqwest::Error),
}

/// Top-level error type carried by the downloader's error callback.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Asset(#[from] AssetError),
}
