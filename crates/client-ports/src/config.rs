//! Client configuration, read once at process start.

use std::env;

use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "http://localhost:8777";
pub const API_BASE_ENV: &str = "STORYMAKER_API_BASE";
pub const API_MOCK_ENV: &str = "STORYMAKER_API_MOCK";

/// Which backend the process talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TransportKind {
    /// HTTP against the configured base address.
    #[default]
    Real,
    /// In-memory stand-in seeded with fixtures.
    Simulated,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("STORYMAKER_API_BASE is not a valid URL ({url}): {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base address without a trailing slash; request paths are appended to it.
    pub base_url: String,
    pub transport: TransportKind,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            transport: TransportKind::Real,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: &str, transport: TransportKind) -> Result<Self, ConfigError> {
        url::Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        })
    }

    /// Simulated backend at the default address (the address is never dialed).
    pub fn simulated() -> Self {
        Self {
            transport: TransportKind::Simulated,
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(API_BASE_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let transport = match lookup(API_MOCK_ENV) {
            Some(flag) if flag.trim().eq_ignore_ascii_case("true") => TransportKind::Simulated,
            _ => TransportKind::Real,
        };

        Self::new(&base_url, transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_real_transport_on_localhost() {
        let cfg = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.base_url, "http://localhost:8777");
        assert_eq!(cfg.transport, TransportKind::Real);
    }

    #[test]
    fn mock_flag_selects_simulated_transport() {
        let cfg = ApiConfig::from_lookup(lookup(&[(API_MOCK_ENV, "true")])).unwrap();
        assert_eq!(cfg.transport, TransportKind::Simulated);

        let cfg = ApiConfig::from_lookup(lookup(&[(API_MOCK_ENV, "yes")])).unwrap();
        assert_eq!(cfg.transport, TransportKind::Real);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let cfg =
            ApiConfig::from_lookup(lookup(&[(API_BASE_ENV, "https://api.example.com/")])).unwrap();
        assert_eq!(cfg.base_url, "https://api.example.com");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = ApiConfig::from_lookup(lookup(&[(API_BASE_ENV, "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }
}
