use super::{RawResponse, TransportFailure};
use crate::config::ClientConfig;
use crate::error::DEFAULT_ERROR_STATUS;
use crate::response::{normalize, ApiResponse, Payload};
use crate::{Error, ErrorContext, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("primvoices-rust/", env!("CARGO_PKG_VERSION"));

/// One request against the service, relative to the configured base URL.
#[derive(Debug, Clone)]
pub(crate) struct ApiRequest {
    method: Method,
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
    body: Option<Value>,
}

impl ApiRequest {
    fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append one path segment. It is percent-encoded, so ids containing `/`
    /// or `?` stay a single segment.
    pub fn segment(mut self, segment: &str) -> Self {
        self.segments.push(segment.to_owned());
        self
    }

    pub fn query(mut self, pairs: Vec<(&'static str, String)>) -> Self {
        self.query = pairs;
        self
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(|e| {
            Error::validation_with_context(
                format!("request body is not valid JSON: {}", e),
                ErrorContext::new().with_source("request_encoder"),
            )
        })?;
        self.body = Some(value);
        Ok(self)
    }

    fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

pub(crate) struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.parsed_base_url()?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key)).map_err(|_| {
            Error::validation_with_context(
                "apiKey is not a valid header value",
                ErrorContext::new()
                    .with_field_path("api_key")
                    .with_source("client_builder"),
            )
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            Error::transport(
                DEFAULT_ERROR_STATUS,
                format!("Failed to create HTTP client: {}", e),
            )
        })?;

        Ok(Self { client, base_url })
    }

    /// Send `request` and normalize the outcome. Every facade call goes
    /// through here.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        payload: Payload,
    ) -> Result<ApiResponse<T>> {
        normalize(self.send(&request).await, payload)
    }

    async fn send(&self, request: &ApiRequest) -> std::result::Result<RawResponse, TransportFailure> {
        let url = self.url_for(request)?;
        debug!(method = %request.method, path = %request.path(), "sending request");

        let mut builder = self.client.request(request.method.clone(), url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| TransportFailure::Network {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        })?;

        let status = response.status();
        // A body cut short (e.g. by the timeout) counts as no response.
        let text = response.text().await.map_err(|e| TransportFailure::Network {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        })?;
        debug!(status = status.as_u16(), path = %request.path(), "received response");

        let body = parse_body(&text);
        if status.is_success() {
            Ok(RawResponse {
                status: status.as_u16(),
                body,
            })
        } else {
            Err(TransportFailure::Status {
                status: status.as_u16(),
                body,
            })
        }
    }

    fn url_for(&self, request: &ApiRequest) -> std::result::Result<Url, TransportFailure> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TransportFailure::Network {
                status: None,
                message: format!("base URL {} cannot carry a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(&request.segments);
        Ok(url)
    }
}

// Empty bodies become null; bodies that are not JSON are kept as a string.
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}
