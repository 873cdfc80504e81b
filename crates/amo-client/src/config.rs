//! Client configuration.

use std::time::Duration;

use crate::{DEFAULT_API_VERSION, USER_AGENT};

/// Settings for [`AmoHttpClient`](crate::AmoHttpClient) and
/// [`AmoClient`](crate::AmoClient).
///
/// amoCRM answers list requests with up to 250 embedded entities, so the
/// default request timeout leaves room for large pages.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Whole-request timeout.
    pub timeout: Duration,
    /// TCP/TLS connect timeout.
    pub connect_timeout: Duration,
    /// Ask for gzip/deflate responses and decode them.
    pub compress_responses: bool,
    /// Version used in `/api/v{N}/` paths.
    pub api_version: u32,
    /// User-Agent header value.
    pub user_agent: String,
    /// Log each request and response status at debug level.
    pub enable_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            compress_responses: true,
            api_version: DEFAULT_API_VERSION,
            user_agent: USER_AGENT.to_string(),
            enable_tracing: true,
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Enable or disable compressed responses.
    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.config.compress_responses = enabled;
        self
    }

    /// Target another API version, e.g. `3` for legacy endpoints.
    pub fn with_api_version(mut self, version: u32) -> Self {
        self.config.api_version = version;
        self
    }

    /// Set custom User-Agent.
    ///
    /// amoCRM asks integrations to identify themselves, so prefer
    /// `"<integration>/<version>"` over the library default.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
