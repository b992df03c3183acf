//! Normalized error channel shared by every transport.

use thiserror::Error;

/// Every way a backend call can fail, reduced to one type.
///
/// `RequestFailed` displays as its bare message so callers can surface it
/// verbatim: a backend answering `{"error": "X"}` produces an error whose
/// `to_string()` is exactly `"X"`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never completed, or the server answered with a non-2xx status.
    #[error("{message}")]
    RequestFailed {
        /// HTTP status when one was received; `None` for network-level failures.
        status: Option<u16>,
        message: String,
    },

    /// The request body could not be encoded.
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),

    /// A 2xx body did not have the shape the caller expected.
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ApiError {
    /// A failure with no HTTP status (connection refused, DNS, ...).
    pub fn request_failed(message: impl Into<String>) -> Self {
        Self::RequestFailed {
            status: None,
            message: message.into(),
        }
    }

    /// A non-2xx answer from the server.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::RequestFailed {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => *status,
            _ => None,
        }
    }

    /// Human-readable message, as shown to the user.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
