//! Voice records.

use super::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered voice profile owned by the authenticated user.
///
/// Only `id` is required when decoding. Fields the service fills in
/// asynchronously (the preview, timestamps) may be absent or null on a
/// freshly created voice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voice {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Input audio the voice was created from.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sample_url: String,
    /// Preview rendered by the service. `None` until it is ready.
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Set by the service once the voice is deleted.
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Voice {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// A voice from the public catalogue. Same shape as [`Voice`] without an owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicVoice {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sample_url: String,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Body of `POST /v1/voices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceCreateParams {
    pub name: String,
    pub sample_url: String,
}

impl VoiceCreateParams {
    pub fn new(name: impl Into<String>, sample_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sample_url: sample_url.into(),
        }
    }
}
