use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::modules::rbga_requests::core::validation::ValidationError;
use crate::modules::rbga_requests::use_cases::errors::ApplicationError;

/// Parses an optional JSON body; an empty body (or `null`) yields `T::default()`.
pub fn optional_json<T>(body: &Bytes) -> Result<T, ApplicationError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice::<Option<T>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|err| ValidationError::MalformedBody(err.to_string()).into())
}
