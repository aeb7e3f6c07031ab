//! HTTP handlers for the wellness API.
//!
//! Every handler answers with HTTP 200 and a JSON body; input and provider
//! failures are expressed in the body shape. The one exception is a POST body
//! that is not JSON at all, which is a 400.

pub mod chat;
pub mod health;
pub mod journal;
pub mod tips;

pub use chat::chat;
pub use health::{health_check, readiness_check};
pub use journal::journal;
pub use tips::tips;

use axum::body::Bytes;
use serde::de::DeserializeOwned;
use service_core::error::AppError;

/// Decode a JSON request body whatever its `Content-Type`. An empty body
/// decodes as `T::default()`.
pub(crate) fn decode_body<T>(body: &Bytes) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(anyhow::Error::new(e)))
}
