//! # primvoices-rust
//!
//! Typed async client for the PrimVoices voice-synthesis API.
//!
//! ## Overview
//!
//! The service exposes two resource groups, voices and generations. This crate
//! turns each remote operation into one async method, attaches the bearer
//! token, checks generation requests before they are sent, and reports every
//! outcome in one of two shapes:
//!
//! - success: [`ApiResponse`] `{data, status, success: true}`
//! - failure: [`Error`], rendered as [`ErrorResponse`] `{error, status, success: false}`
//!
//! [`Error`] has exactly two kinds: [`Error::Validation`] (rejected locally,
//! status 400, nothing sent) and [`Error::Transport`] (the service or the
//! network failed; status 500 when no response arrived).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use primvoices::{Client, GenerationCreateParams, PaginationParams, Quality};
//!
//! #[tokio::main]
//! async fn main() -> primvoices::Result<()> {
//!     let client = Client::new("your-api-key")?;
//!
//!     let voices = client.voices().list(Some(&PaginationParams::new().limit(10))).await?;
//!     let voice = &voices.data[0];
//!
//!     let params = GenerationCreateParams::text_to_speech(&voice.id, Quality::High, "Hello!");
//!     let generation = client.generations().create(&params).await?;
//!     println!("generation {} queued", generation.data.id);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`Client`], its builder, and generation request validation |
//! | [`facade`] | [`VoicesApi`] and [`GenerationsApi`] |
//! | [`types`] | Voice, generation, quality and pagination records |
//! | [`response`] | Success/error envelopes |
//! | [`config`] | [`ClientConfig`] and defaults |
//! | [`error`] | [`Error`] and [`ErrorContext`] |

pub mod client;
pub mod config;
pub mod error;
pub mod facade;
pub mod response;
pub mod types;

pub(crate) mod transport;

// Re-export main types for convenience
pub use client::{Client, ClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{Error, ErrorContext};
pub use facade::prelude;
pub use facade::{GenerationsApi, VoicesApi};
pub use response::{ApiResponse, ErrorResponse};
pub use types::{
    Generation, GenerationCreateParams, PaginationParams, PublicVoice, Quality, Voice,
    VoiceCreateParams,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
