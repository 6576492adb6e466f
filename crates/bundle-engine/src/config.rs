use std::path::PathBuf;
use std::time::Duration;

use reqwest::header::HeaderMap;

const DEFAULT_USER_AGENT: &str =
    concat!("bundle-engine/", env!("CARGO_PKG_VERSION"));

/// Configurable options for the engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Cache root directory. When `None`, a directory under the system temp
    /// dir is used.
    pub cache_root: Option<PathBuf>,

    /// Overall timeout for an entire HTTP request
    pub timeout: Duration,

    /// Connection timeout (time to establish initial connection)
    pub connect_timeout: Duration,

    /// Whether to follow redirects
    pub follow_redirects: bool,

    /// User agent string
    pub user_agent: String,

    /// Custom HTTP headers for requests
    pub headers: HeaderMap,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_root: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            follow_redirects: true,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            headers: HeaderMap::new(),
        }
    }
}

impl EngineConfig {
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }

    /// The effective cache root, falling back to the system temp dir.
    pub fn resolved_cache_root(&self) -> PathBuf {
        self.cache_root
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("bundle-engine-cache"))
    }
}

/// Builder for creating [`EngineConfig`] instances with a fluent API.
#[derive(Debug, Clone)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Set the cache root directory
    pub fn with_cache_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.cache_root = Some(root.into());
        self
    }

    /// Set the overall timeout for an entire HTTP request
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the connection timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Enable or disable following redirects
    pub fn with_follow_redirects(mut self, follow: bool) -> Self {
        self.config.follow_redirects = follow;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Add a custom header sent with every request. Invalid names or values
    /// are ignored.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        use reqwest::header::{HeaderName, HeaderValue};

        if let (Ok(name), Ok(value)) = (
            name.parse::<HeaderName>(),
            value.parse::<HeaderValue>(),
        ) {
            self.config.headers.insert(name, value);
        }
        self
    }

    pub fn build(self) -> EngineConfig {
        self.config
    }
}

impl Default for EngineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
