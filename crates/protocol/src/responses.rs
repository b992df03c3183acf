//! Response envelopes
//!
//! Every success body is `{ "status": "ok", "data": ... }`; every failure body
//! is `{ "status": "error", "error": "...", "code": <http status> }`.

use serde::{Deserialize, Serialize};
use storymaker_domain::{BookId, CharacterId};

fn ok_status() -> String {
    "ok".to_string()
}

fn error_status() -> String {
    "error".to_string()
}

fn bearer() -> String {
    "bearer".to_string()
}

/// Success envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default = "ok_status")]
    pub status: String,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: ok_status(),
            data,
            meta: None,
        }
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

/// Error envelope emitted for any non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default = "error_status")]
    pub status: String,
    pub error: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(code: u16, error: impl Into<String>) -> Self {
        Self {
            status: error_status(),
            error: error.into(),
            code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCreated {
    pub book_id: BookId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterCreated {
    pub character_id: CharacterId,
}

/// Session issued by `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "token")]
    pub access_token: String,
    #[serde(default = "bearer")]
    pub token_type: String,
}

/// `GET /api/health` is the one route without a `data` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
