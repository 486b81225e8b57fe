//! Pre-flight checks for generation requests.
//!
//! Checks run in a fixed order and stop at the first failure:
//! quality, then voiceId, then the tier-specific input (`text` or `sourceUrl`).

use crate::types::GenerationCreateParams;
use crate::{Error, ErrorContext, Result};
use tracing::debug;

const SOURCE: &str = "generation_validator";

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

fn required(field: &str, message: String) -> Error {
    debug!(field, "rejecting generation request: {}", message);
    Error::validation_with_context(
        message,
        ErrorContext::new().with_field_path(field).with_source(SOURCE),
    )
}

/// Validate a generation request before it is sent.
///
/// Returns the first failing check as [`Error::Validation`]; the params are
/// never modified.
pub fn validate_generation_params(params: &GenerationCreateParams) -> Result<()> {
    let quality = params
        .quality
        .ok_or_else(|| required("quality", "quality is required".to_string()))?;

    if params.voice_id.is_empty() {
        return Err(required("voiceId", "voiceId is required".to_string()));
    }

    if quality.requires_text() && is_blank(params.text.as_deref()) {
        return Err(required(
            "text",
            format!("text is required for quality {}", quality),
        ));
    }

    if quality.requires_source_url() && is_blank(params.source_url.as_deref()) {
        return Err(required(
            "sourceUrl",
            format!("sourceUrl is required for quality {}", quality),
        ));
    }

    Ok(())
}
