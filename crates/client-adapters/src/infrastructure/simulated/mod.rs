//! Simulated transport - the backend contract without a backend
//!
//! Used when `STORYMAKER_API_MOCK=true`, in tests, and for demos. Responses go
//! through the same normalization as the HTTP transport, so callers cannot tell
//! the two apart.

mod backend;
pub mod fixtures;

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde_json::Value;

use storymaker_client_ports::outbound::{ApiError, RawApiPort, RequestOptions};
use storymaker_client_ports::TransportKind;

pub use backend::{SimulatedBackend, SimulatedResponse};

use super::response::normalize;

static SHARED: Lazy<SimulatedTransport> = Lazy::new(SimulatedTransport::new);

/// Handle to an in-memory backend. Clones share the same store.
#[derive(Clone)]
pub struct SimulatedTransport {
    backend: Arc<Mutex<SimulatedBackend>>,
}

impl SimulatedTransport {
    /// A fresh store seeded with the fixtures.
    pub fn new() -> Self {
        Self::with_backend(SimulatedBackend::seeded())
    }

    pub fn with_backend(backend: SimulatedBackend) -> Self {
        Self {
            backend: Arc::new(Mutex::new(backend)),
        }
    }

    /// The process-wide store used when configuration selects the simulated backend.
    pub fn shared() -> Self {
        SHARED.clone()
    }

    /// Lock the store for inspection. The lock is never held across an await.
    pub fn backend(&self) -> MutexGuard<'_, SimulatedBackend> {
        self.backend.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Route one request without normalizing the answer.
    pub fn handle(&self, path: &str, options: &RequestOptions) -> SimulatedResponse {
        self.backend().handle(path, options)
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RawApiPort for SimulatedTransport {
    async fn request_json(&self, path: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let SimulatedResponse { status, body } = self.handle(path, &options);
        tracing::debug!(method = %options.method, path, status, "simulated backend responded");
        normalize(status, body)
    }

    fn kind(&self) -> TransportKind {
        TransportKind::Simulated
    }
}
