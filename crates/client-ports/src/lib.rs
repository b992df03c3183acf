//! Client port definitions and shared configuration types.

pub mod config;
pub mod outbound;

pub use config::{ApiConfig, ConfigError, TransportKind};
