//! Response normalization shared by both transports.
//!
//! Keeping this in one place is what makes the live and simulated transports
//! fail in exactly the same shape.

use reqwest::StatusCode;
use serde_json::{Map, Value};
use storymaker_client_ports::outbound::ApiError;

pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Decode a response body; anything that is not JSON becomes `{}`.
pub fn decode_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Message for a non-2xx answer: body `error` field, else reason phrase, else a fallback.
///
/// `reason` is the phrase the server put on its status line, when it sent one
/// other than the standard phrase for the code.
pub fn failure_message(status: u16, reason: Option<&str>, body: &Value) -> String {
    match body.get("error") {
        Some(Value::String(message)) => return message.clone(),
        Some(Value::Null) | None => {}
        Some(other) => return other.to_string(),
    }

    reason
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .or_else(|| StatusCode::from_u16(status).ok().and_then(|s| s.canonical_reason()))
        .unwrap_or(UNKNOWN_ERROR)
        .to_string()
}

/// Turn a status and decoded body into the transport result.
pub fn normalize(status: u16, body: Value) -> Result<Value, ApiError> {
    normalize_with_reason(status, None, body)
}

/// [`normalize`] with the reason phrase from the status line.
pub fn normalize_with_reason(
    status: u16,
    reason: Option<&str>,
    body: Value,
) -> Result<Value, ApiError> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::http(status, failure_message(status, reason, &body)))
    }
}
