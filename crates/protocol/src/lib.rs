//! Storymaker Protocol - JSON shapes exchanged with the backend
//!
//! - Request bodies for the create/login routes
//! - The `{ data: ... }` success envelope and the `{ error: ... }` error envelope
//! - Route paths
//!
//! No business logic lives here; the domain crate owns validation.

pub mod requests;
pub mod responses;
pub mod routes;

pub use requests::{CreateBookRequest, CreateCharacterRequest, LoginRequest};
pub use responses::{
    ApiResponse, BookCreated, CharacterCreated, ErrorResponse, HealthResponse, LoginResponse,
};
