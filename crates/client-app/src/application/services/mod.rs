//! Typed endpoint bindings.
//!
//! One method per backend operation. Each fixes the path, method, headers and
//! response shape; none validates its arguments.

mod auth_service;
mod book_service;
mod character_service;
mod health_service;

pub use auth_service::AuthService;
pub use book_service::BookService;
pub use character_service::CharacterService;
pub use health_service::HealthService;

/// Static credential sent on book and character routes.
pub const DEV_AUTHORIZATION: &str = "DEV";

/// `Authorization` value for a session token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
