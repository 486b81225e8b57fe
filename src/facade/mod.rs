//! Resource facades: one method per remote operation.
//!
//! Each method issues exactly one request through the shared transport and
//! returns the normalized envelope. Nothing is cached or retried.

pub mod generations;
pub mod prelude;
pub mod voices;

pub use generations::GenerationsApi;
pub use voices::VoicesApi;

use crate::types::PaginationParams;

/// Query pairs for a list call. `None` sends no query string.
pub(crate) fn query_of(params: Option<&PaginationParams>) -> Vec<(&'static str, String)> {
    params.map(PaginationParams::to_query).unwrap_or_default()
}
