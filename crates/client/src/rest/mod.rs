//! Repository implementations over REST endpoints.

mod read;
mod repository;

pub use read::HttpRestReadRepository;
pub use repository::HttpRestRepository;

use serde::de::DeserializeOwned;
use serde_json::Value;

use restrepo_core::api::{ApiError, Result};

/// Decodes an item payload, treating a JSON `null` body as "no match".
pub(crate) fn decode_model<T: DeserializeOwned>(value: Value) -> Result<Option<T>> {
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value)
        .map(Some)
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Decodes a collection payload.
pub(crate) fn decode_models<T: DeserializeOwned>(value: Value) -> Result<Vec<T>> {
    serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
}
