//! Live backend transport over HTTP

use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;

use storymaker_client_ports::outbound::{ApiError, HttpMethod, RawApiPort, RequestOptions};
use storymaker_client_ports::{ApiConfig, TransportKind};

use super::response::{decode_body, normalize_with_reason};

/// Talks to the Storymaker backend at a fixed base address.
///
/// One attempt per call; no retries and no timeout of its own.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(Client::new(), &config.base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// JSON content type by default; caller headers replace defaults of the same name.
fn build_headers(headers: &[(String, String)]) -> Result<HeaderMap, ApiError> {
    let mut map = HeaderMap::new();
    map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ApiError::request_failed(format!("invalid header name {name:?}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ApiError::request_failed(format!("invalid value for header {name}: {e}")))?;
        map.insert(name, value);
    }
    Ok(map)
}

#[async_trait]
impl RawApiPort for HttpTransport {
    async fn request_json(&self, path: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let headers = build_headers(&options.headers)?;

        let mut request = self
            .client
            .request(to_reqwest_method(options.method), &url)
            .headers(headers);

        if let Some(body) = &options.body {
            let bytes =
                serde_json::to_vec(body).map_err(|e| ApiError::SerializeError(e.to_string()))?;
            request = request.body(bytes);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(method = %options.method, %url, error = %e, "request failed");
            ApiError::request_failed(e.to_string())
        })?;

        let status = response.status().as_u16();
        // Only present when the server sent a non-standard phrase.
        let reason = response
            .extensions()
            .get::<ReasonPhrase>()
            .and_then(|r| std::str::from_utf8(r.as_bytes()).ok())
            .map(str::to_owned);
        // A body that cannot be read is treated like one that cannot be decoded.
        let bytes = response.bytes().await.unwrap_or_default();
        let body = decode_body(&bytes);

        tracing::debug!(method = %options.method, path, status, "backend responded");

        normalize_with_reason(status, reason.as_deref(), body).inspect_err(|e| {
            tracing::warn!(method = %options.method, path, status, error = %e, "backend returned an error");
        })
    }

    fn kind(&self) -> TransportKind {
        TransportKind::Real
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_headers_override_defaults() {
        let headers = build_headers(&[("content-type".into(), "text/plain".into())]).unwrap();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn default_content_type_is_json() {
        let headers = build_headers(&[("Authorization".into(), "DEV".into())]).unwrap();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get("authorization").unwrap(), "DEV");
    }

    #[test]
    fn invalid_header_is_a_request_failure() {
        let err = build_headers(&[("bad header".into(), "x".into())]).unwrap_err();
        assert!(matches!(err, ApiError::RequestFailed { status: None, .. }));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let transport = HttpTransport::with_client(Client::new(), "http://localhost:8777/");
        assert_eq!(transport.base_url(), "http://localhost:8777");
    }
}
