//! Response envelopes and the single point where raw transport outcomes are
//! turned into them.
//!
//! Every facade call resolves to either an [`ApiResponse`] or an
//! [`Error`](crate::Error) that renders as an [`ErrorResponse`]. Nothing else
//! in the crate inspects HTTP statuses or error bodies.

use crate::error::DEFAULT_ERROR_STATUS;
use crate::transport::{RawResponse, TransportFailure};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Success envelope: `{data, status, success: true}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: u16,
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, status: u16) -> Self {
        Self {
            data,
            status,
            success: true,
        }
    }

    pub fn into_data(self) -> T {
        self.data
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            data: f(self.data),
            status: self.status,
            success: self.success,
        }
    }
}

/// Error envelope: `{error, status, success: false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub status: u16,
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, status: u16) -> Self {
        Self {
            error: error.into(),
            status,
            success: false,
        }
    }
}

/// Which part of a successful body becomes `data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Payload {
    /// The `data` field of the JSON body.
    DataField,
    /// The whole body as received. Used by delete operations.
    Body,
}

pub(crate) fn normalize<T: DeserializeOwned>(
    outcome: std::result::Result<RawResponse, TransportFailure>,
    payload: Payload,
) -> Result<ApiResponse<T>> {
    match outcome {
        Ok(raw) => normalize_success(raw, payload),
        Err(failure) => Err(normalize_failure(failure)),
    }
}

fn normalize_success<T: DeserializeOwned>(raw: RawResponse, payload: Payload) -> Result<ApiResponse<T>> {
    let RawResponse { status, body } = raw;
    let data = match payload {
        Payload::DataField => match body {
            Value::Object(mut map) => map.remove("data").unwrap_or(Value::Null),
            _ => Value::Null,
        },
        Payload::Body => body,
    };
    let data = serde_json::from_value(data).map_err(|e| {
        warn!(status, "response data did not match the expected shape: {}", e);
        Error::transport(status, format!("Failed to decode response data: {}", e))
    })?;
    Ok(ApiResponse::ok(data, status))
}

pub(crate) fn normalize_failure(failure: TransportFailure) -> Error {
    let (status, message) = match failure {
        TransportFailure::Network { status, message } => {
            (status.unwrap_or(DEFAULT_ERROR_STATUS), message)
        }
        TransportFailure::Status { status, body } => {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .map(str::to_owned)
                .unwrap_or_else(|| format!("Request failed with status code {}", status));
            (status, message)
        }
    };
    warn!(status, error = %message, "request failed");
    Error::transport(status, message)
}
