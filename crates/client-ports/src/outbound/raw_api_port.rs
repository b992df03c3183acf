//! Raw API Port - Object-safe transport boundary
//!
//! A typed `request<T>` is generic and therefore not object-safe. The
//! composition root needs to pick a transport at startup and store it behind
//! `Arc<dyn ...>`, so adapters implement this JSON-in/JSON-out trait and the
//! application layer provides the typed wrapper on top.

use std::fmt;

use serde_json::Value;

use super::ApiError;
use crate::TransportKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything about a request except its path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    /// Caller-supplied headers; these win over transport defaults.
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            headers: Vec::new(),
            body: Some(body),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Last value set for `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .rev()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// One request in, one decoded body (or one normalized error) out.
///
/// Contract shared by every implementation:
/// - a 2xx answer yields its JSON body; an undecodable body yields `{}`
/// - a non-2xx answer yields `ApiError::RequestFailed` whose message is the
///   body's `error` field, else the status reason phrase, else `"Unknown error"`
/// - exactly one attempt, no retries
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait]
pub trait RawApiPort: Send + Sync {
    async fn request_json(&self, path: &str, options: RequestOptions) -> Result<Value, ApiError>;

    /// Which backend this port talks to (for logs and diagnostics only).
    fn kind(&self) -> TransportKind;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn header_lookup_is_case_insensitive_and_last_wins() {
        let opts = RequestOptions::get()
            .with_header("Authorization", "DEV")
            .with_header("authorization", "Bearer t");
        assert_eq!(opts.header("AUTHORIZATION"), Some("Bearer t"));
        assert_eq!(opts.header("Content-Type"), None);
    }

    #[test]
    fn post_carries_body() {
        let opts = RequestOptions::post(json!({"email": "dev@local"}));
        assert_eq!(opts.method, HttpMethod::Post);
        assert_eq!(opts.body, Some(json!({"email": "dev@local"})));
    }

    #[tokio::test]
    async fn mock_port_can_stand_in_for_a_transport() {
        let mut mock = MockRawApiPort::new();
        mock.expect_request_json()
            .times(1)
            .returning(|_, _| Err(ApiError::http(503, "Service Unavailable")));
        mock.expect_kind().return_const(TransportKind::Real);

        let port: &dyn RawApiPort = &mock;
        let err = port
            .request_json("/api/books", RequestOptions::get())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Service Unavailable");
        assert_eq!(port.kind(), TransportKind::Real);
    }
}
