//! Minimal prelude for application code.
//!
//! Goal: reduce import noise without hiding important concepts.

pub use crate::client::{Client, ClientBuilder};
pub use crate::config::ClientConfig;
pub use crate::facade::{GenerationsApi, VoicesApi};
pub use crate::response::{ApiResponse, ErrorResponse};
pub use crate::types::{
    Generation, GenerationCreateParams, PaginationParams, PublicVoice, Quality, Voice,
    VoiceCreateParams,
};
pub use crate::{Error, Result};
