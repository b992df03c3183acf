//! Transport selection, done once at startup.

use std::sync::Arc;

use storymaker_client_ports::outbound::RawApiPort;
use storymaker_client_ports::{ApiConfig, TransportKind};

use super::{HttpTransport, SimulatedTransport};

/// Build the transport the configuration asks for.
///
/// Nothing above this call knows which one it got.
pub fn create_transport(config: &ApiConfig) -> Arc<dyn RawApiPort> {
    match config.transport {
        TransportKind::Real => {
            tracing::info!(base_url = %config.base_url, "Using live backend");
            Arc::new(HttpTransport::new(config))
        }
        TransportKind::Simulated => {
            tracing::info!("Using simulated backend");
            Arc::new(SimulatedTransport::shared())
        }
    }
}
