//! Auth Service - development login and profile lookup

use storymaker_client_ports::outbound::ApiError;
use storymaker_domain::UserProfile;
use storymaker_protocol::{routes, ApiResponse, LoginRequest, LoginResponse};

use super::bearer;
use crate::application::Api;

#[derive(Clone)]
pub struct AuthService {
    api: Api,
}

impl AuthService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Exchange credentials for a session token. Sent without any credential.
    pub async fn login(
        &self,
        email: &str,
        password: Option<&str>,
    ) -> Result<ApiResponse<LoginResponse>, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.unwrap_or_default().to_string(),
        };
        self.api.post(routes::LOGIN, &request, None).await
    }

    pub async fn me(&self, token: &str) -> Result<ApiResponse<UserProfile>, ApiError> {
        self.api.get(routes::ME, Some(&bearer(token))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde_json::json;
    use storymaker_client_adapters::infrastructure::SimulatedTransport;
    use storymaker_client_ports::outbound::MockRawApiPort;

    #[tokio::test]
    async fn login_defaults_to_an_empty_password() {
        let mut raw = MockRawApiPort::new();
        raw.expect_request_json()
            .withf(|path, opts| {
                path == "/api/login"
                    && opts.header("Authorization").is_none()
                    && opts.body == Some(json!({"email": "dev@local", "password": ""}))
            })
            .returning(|_, _| Ok(json!({"data": {"access_token": "t", "token_type": "bearer"}})));

        let auth = AuthService::new(Api::new(Arc::new(raw)));
        let session = auth.login("dev@local", None).await.unwrap();
        assert_eq!(session.data.access_token, "t");
    }

    #[tokio::test]
    async fn token_from_login_unlocks_the_profile() {
        let auth = AuthService::new(Api::new(Arc::new(SimulatedTransport::new())));
        let session = auth.login("dev@local", Some("")).await.unwrap();

        let profile = auth.me(&session.data.access_token).await.unwrap();
        assert_eq!(profile.data.email, "dev@local");

        let err = auth.me("stale").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Invalid token");
    }

    #[tokio::test]
    async fn unknown_account_is_rejected() {
        let auth = AuthService::new(Api::new(Arc::new(SimulatedTransport::new())));
        let err = auth.login("foo@example.com", Some("x")).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
    }
}
