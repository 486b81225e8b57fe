//! `/v1/generations`.

use super::query_of;
use crate::client::validation::validate_generation_params;
use crate::response::{ApiResponse, Payload};
use crate::transport::{ApiRequest, HttpTransport};
use crate::types::{Generation, GenerationCreateParams, PaginationParams};
use crate::Result;
use serde_json::Value;
use std::sync::Arc;

const GENERATIONS: &str = "/v1/generations";

/// Generation operations. Obtained from [`Client::generations`](crate::Client::generations).
#[derive(Clone)]
pub struct GenerationsApi {
    transport: Arc<HttpTransport>,
}

impl GenerationsApi {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    pub async fn list(
        &self,
        params: Option<&PaginationParams>,
    ) -> Result<ApiResponse<Vec<Generation>>> {
        let request = ApiRequest::get(GENERATIONS).query(query_of(params));
        self.transport.execute(request, Payload::DataField).await
    }

    pub async fn retrieve(&self, generation_id: &str) -> Result<ApiResponse<Generation>> {
        let request = ApiRequest::get(GENERATIONS).segment(generation_id);
        self.transport.execute(request, Payload::DataField).await
    }

    /// Start a generation.
    ///
    /// The params are validated first (see
    /// [`validate_generation_params`]); on failure no request is sent and an
    /// [`Error::Validation`](crate::Error::Validation) is returned. Otherwise
    /// the params are posted as-is. The service may still reject the call,
    /// e.g. for an unknown voice or insufficient balance.
    pub async fn create(&self, params: &GenerationCreateParams) -> Result<ApiResponse<Generation>> {
        validate_generation_params(params)?;
        let request = ApiRequest::post(GENERATIONS).json(params)?;
        self.transport.execute(request, Payload::DataField).await
    }

    /// Delete a generation. Like [`VoicesApi::delete`](super::VoicesApi::delete),
    /// `data` is the raw response body.
    pub async fn delete(&self, generation_id: &str) -> Result<ApiResponse<Value>> {
        let request = ApiRequest::delete(GENERATIONS).segment(generation_id);
        self.transport.execute(request, Payload::Body).await
    }
}
