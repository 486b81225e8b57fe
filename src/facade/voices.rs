//! `/v1/voices` and `/v1/publicVoices`.

use super::query_of;
use crate::response::{ApiResponse, Payload};
use crate::transport::{ApiRequest, HttpTransport};
use crate::types::{PaginationParams, PublicVoice, Voice, VoiceCreateParams};
use crate::Result;
use serde_json::Value;
use std::sync::Arc;

const VOICES: &str = "/v1/voices";
const PUBLIC_VOICES: &str = "/v1/publicVoices";

/// Voice operations. Obtained from [`Client::voices`](crate::Client::voices).
#[derive(Clone)]
pub struct VoicesApi {
    transport: Arc<HttpTransport>,
}

impl VoicesApi {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List the authenticated user's voices.
    pub async fn list(&self, params: Option<&PaginationParams>) -> Result<ApiResponse<Vec<Voice>>> {
        let request = ApiRequest::get(VOICES).query(query_of(params));
        self.transport.execute(request, Payload::DataField).await
    }

    pub async fn retrieve(&self, voice_id: &str) -> Result<ApiResponse<Voice>> {
        let request = ApiRequest::get(VOICES).segment(voice_id);
        self.transport.execute(request, Payload::DataField).await
    }

    /// Register a new voice from a sample recording.
    pub async fn create(&self, params: &VoiceCreateParams) -> Result<ApiResponse<Voice>> {
        let request = ApiRequest::post(VOICES).json(params)?;
        self.transport.execute(request, Payload::DataField).await
    }

    /// Delete a voice. `data` is the response body as sent by the service,
    /// not its `data` field; `Null` when the body is empty.
    pub async fn delete(&self, voice_id: &str) -> Result<ApiResponse<Value>> {
        let request = ApiRequest::delete(VOICES).segment(voice_id);
        self.transport.execute(request, Payload::Body).await
    }

    pub async fn list_public(
        &self,
        params: Option<&PaginationParams>,
    ) -> Result<ApiResponse<Vec<PublicVoice>>> {
        let request = ApiRequest::get(PUBLIC_VOICES).query(query_of(params));
        self.transport.execute(request, Payload::DataField).await
    }

    pub async fn retrieve_public(&self, voice_id: &str) -> Result<ApiResponse<PublicVoice>> {
        let request = ApiRequest::get(PUBLIC_VOICES).segment(voice_id);
        self.transport.execute(request, Payload::DataField).await
    }
}
