//! Transport adapters for the Storymaker client.
//!
//! Both implement `RawApiPort`; `infrastructure::transport::create_transport`
//! picks one from configuration at startup.

pub mod infrastructure;
