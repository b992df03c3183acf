use storymaker_client_ports::outbound::ApiError;
use storymaker_protocol::{routes, HealthResponse};

use crate::application::Api;

/// Backend liveness probe.
#[derive(Clone)]
pub struct HealthService {
    api: Api,
}

impl HealthService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.api.get(routes::HEALTH, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use storymaker_client_adapters::infrastructure::SimulatedTransport;

    #[tokio::test]
    async fn simulated_backend_is_healthy() {
        let service = HealthService::new(Api::new(Arc::new(SimulatedTransport::new())));
        assert_eq!(service.health().await.unwrap().status, "ok");
    }
}
