//! Client entry point.
//!
//! Developer-friendly goal: keep the public surface small and predictable.
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;
pub mod validation;

pub use builder::ClientBuilder;
pub use core::Client;
