//! HTTP transport: one configured `reqwest::Client` shared by every facade.
//!
//! The transport only reports what happened on the wire. Turning that into
//! envelopes is the job of [`crate::response`].

mod http;

pub(crate) use http::{ApiRequest, HttpTransport};

use serde_json::Value;

/// A 2xx response with its parsed body.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: Value,
}

/// Why a request did not produce a 2xx response.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TransportFailure {
    /// The request could not be sent or its body could not be read.
    /// `status` is set only if a status line was received first.
    Network { status: Option<u16>, message: String },
    /// The server answered with a non-2xx status.
    Status { status: u16, body: Value },
}
