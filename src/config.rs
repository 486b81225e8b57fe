//! Client configuration.

use crate::{Error, ErrorContext, Result};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Origin of the hosted PrimVoices API.
pub const DEFAULT_BASE_URL: &str = "https://api.primvoices.com";

/// Settings fixed at client construction.
#[derive(Clone)]
pub struct ClientConfig {
    /// Sent as `Authorization: Bearer <api_key>` on every request.
    pub api_key: String,
    pub base_url: String,
    /// Whole-request timeout applied by the HTTP client. `None` means no limit.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::validation_with_context(
                "apiKey is required",
                ErrorContext::new()
                    .with_field_path("api_key")
                    .with_source("client_builder"),
            ));
        }
        self.parsed_base_url().map(|_| ())
    }

    pub(crate) fn parsed_base_url(&self) -> Result<Url> {
        let invalid = |details: String| {
            Error::validation_with_context(
                format!("invalid base URL: {}", self.base_url),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(details)
                    .with_source("client_builder"),
            )
        };
        let url = Url::parse(self.base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(invalid(format!("unsupported scheme {}", url.scheme())));
        }
        Ok(url)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
