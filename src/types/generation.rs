//! Generation records and the quality tiers that gate their inputs.

use super::null_as_default;
use crate::{Error, ErrorContext};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generation tier.
///
/// `Low`, `Medium` and `High` synthesize speech from `text`; `Voice` converts
/// the audio at `sourceUrl` into the target voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Low,
    Medium,
    High,
    Voice,
}

impl Quality {
    pub const ALL: [Quality; 4] = [Quality::Low, Quality::Medium, Quality::High, Quality::Voice];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Voice => "voice",
        }
    }

    pub fn requires_text(&self) -> bool {
        matches!(self, Self::Low | Self::Medium | Self::High)
    }

    pub fn requires_source_url(&self) -> bool {
        matches!(self, Self::Voice)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quality {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|q| q.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::validation_with_context(
                    format!("unknown quality {}", s),
                    ErrorContext::new()
                        .with_field_path("quality")
                        .with_details("expected one of low, medium, high, voice"),
                )
            })
    }
}

/// One generation job as reported by the service.
///
/// Only `id` is required when decoding; a job that is still rendering has no
/// `audio_url` yet. `quality` is kept as sent so tiers this crate does not
/// know about still decode; use [`Generation::quality_tier`] for the typed view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Generation {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub voice_id: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quality: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cost: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Generation {
    /// The tier this job ran at, if it is one of the known tiers.
    pub fn quality_tier(&self) -> Option<Quality> {
        self.quality.parse().ok()
    }

    pub fn is_ready(&self) -> bool {
        self.audio_url.as_deref().map_or(false, |url| !url.is_empty())
    }
}

/// Body of `POST /v1/generations`.
///
/// Every field is optional at the type level so incomplete requests can be
/// represented and rejected before sending; see
/// [`validate_generation_params`](crate::client::validation::validate_generation_params).
/// Absent fields are left out of the serialized body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationCreateParams {
    #[serde(default)]
    pub voice_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<Quality>,
}

impl GenerationCreateParams {
    /// Speech from text at one of the text tiers.
    pub fn text_to_speech(
        voice_id: impl Into<String>,
        quality: Quality,
        text: impl Into<String>,
    ) -> Self {
        Self {
            voice_id: voice_id.into(),
            text: Some(text.into()),
            quality: Some(quality),
            ..Default::default()
        }
    }

    /// Conversion of existing audio into the given voice.
    pub fn voice_conversion(voice_id: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            voice_id: voice_id.into(),
            source_url: Some(source_url.into()),
            quality: Some(Quality::Voice),
            ..Default::default()
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
