//! # Types Module
//!
//! Plain records exchanged with the PrimVoices service. The client never owns
//! their lifecycle; every value here is either sent as a request body/query or
//! decoded from a response body.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Voice`] | A voice profile owned by the authenticated user |
//! | [`PublicVoice`] | Ownerless, read-only projection of a voice |
//! | [`Generation`] | One synthesis/conversion job and its output |
//! | [`Quality`] | Generation tier; decides which input fields are required |
//! | [`PaginationParams`] | `limit`/`offset` passed through to list calls |
//!
//! ## Example
//!
//! ```rust
//! use primvoices::types::{GenerationCreateParams, PaginationParams, Quality};
//!
//! let tts = GenerationCreateParams::text_to_speech("voice123", Quality::High, "Hello there")
//!     .with_notes("calm, slow");
//! let conversion = GenerationCreateParams::voice_conversion("voice123", "https://example.com/in.wav");
//! let page = PaginationParams::new().limit(20).offset(40);
//! # let _ = (tts, conversion, page);
//! ```

pub mod generation;
pub mod pagination;
pub mod voice;

pub use generation::{Generation, GenerationCreateParams, Quality};
pub use pagination::PaginationParams;
pub use voice::{PublicVoice, Voice, VoiceCreateParams};

use serde::{Deserialize, Deserializer};

// Missing and null both decode to the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
