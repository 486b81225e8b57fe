use crate::client::core::Client;
use crate::config::ClientConfig;
use crate::Result;
use std::time::Duration;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable (developer-friendly).
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout: None,
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the service origin.
    ///
    /// This is primarily for testing with mock servers. A path prefix is kept
    /// and the `/v1/...` routes are appended to it.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Limit how long a single request may take. Off unless set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<Client> {
        // A missing key is reported by `ClientConfig::validate`.
        let mut config = ClientConfig::new(self.api_key.unwrap_or_default());
        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        Client::from_config(config)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
