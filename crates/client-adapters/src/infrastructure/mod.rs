pub mod http_client;
pub mod response;
pub mod simulated;
pub mod transport;

pub use http_client::HttpTransport;
pub use simulated::{SimulatedBackend, SimulatedResponse, SimulatedTransport};
pub use transport::create_transport;
