//! Outbound ports - Interfaces for external services
//!
//! These ports define the contract both transports implement, so application
//! services can talk to "the backend" without knowing whether it is a live
//! HTTP server or the in-memory stand-in.

pub mod api_port;
pub mod raw_api_port;

pub use api_port::ApiError;
pub use raw_api_port::{HttpMethod, RawApiPort, RequestOptions};

#[cfg(any(test, feature = "testing"))]
pub use raw_api_port::MockRawApiPort;
