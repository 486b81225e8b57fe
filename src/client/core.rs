use crate::client::builder::ClientBuilder;
use crate::config::ClientConfig;
use crate::facade::{GenerationsApi, VoicesApi};
use crate::transport::HttpTransport;
use crate::Result;
use std::sync::Arc;
use tracing::info;

/// PrimVoices API client.
///
/// Holds one HTTP client shared by both resource groups. Cloning is cheap and
/// clones share that HTTP client; concurrent calls are independent.
#[derive(Clone)]
pub struct Client {
    voices: VoicesApi,
    generations: GenerationsApi,
}

impl Client {
    /// Client for the hosted API, authenticated with `api_key`.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key))
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = Arc::new(HttpTransport::new(&config)?);
        info!(base_url = %config.base_url, "primvoices client initialized");
        Ok(Self {
            voices: VoicesApi::new(transport.clone()),
            generations: GenerationsApi::new(transport),
        })
    }

    pub fn voices(&self) -> &VoicesApi {
        &self.voices
    }

    pub fn generations(&self) -> &GenerationsApi {
        &self.generations
    }
}
