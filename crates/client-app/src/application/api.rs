//! Typed API wrapper for application services.
//!
//! The transport port is JSON-in/JSON-out so that the composition root can hold
//! it as `Arc<dyn RawApiPort>`. `Api` puts the generic, typed surface back on
//! top via serde_json conversions.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use storymaker_client_ports::outbound::{ApiError, RawApiPort, RequestOptions};
use storymaker_client_ports::TransportKind;

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }

    pub fn kind(&self) -> TransportKind {
        self.raw.kind()
    }

    /// Send one request and decode the answer as `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let value = self.raw.request_json(path, options).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        authorization: Option<&str>,
    ) -> Result<T, ApiError> {
        self.request(path, with_authorization(RequestOptions::get(), authorization))
            .await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        authorization: Option<&str>,
    ) -> Result<T, ApiError> {
        let body_value =
            serde_json::to_value(body).map_err(|e| ApiError::SerializeError(e.to_string()))?;
        self.request(
            path,
            with_authorization(RequestOptions::post(body_value), authorization),
        )
        .await
    }
}

fn with_authorization(options: RequestOptions, authorization: Option<&str>) -> RequestOptions {
    match authorization {
        Some(value) => options.with_header("Authorization", value),
        None => options,
    }
}
