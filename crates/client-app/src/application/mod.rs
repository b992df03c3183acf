//! Application layer - Use cases and orchestration

pub mod api;
pub mod services;
pub mod wizard;

pub use api::Api;
