//! Storymaker domain types.
//!
//! Books and the characters that appear in them, the limits the backend
//! enforces on them, and the identifiers the client uses to reference them.

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;

pub use entities::{
    Book, Chapter, Character, CharacterType, UserProfile, BOOK_DESCRIPTION_MAX_LEN,
    BOOK_NAME_MAX_LEN, CHAPTER_MAX, CHARACTER_DESCRIPTION_MAX_LEN, CHARACTER_NAME_MAX_LEN,
};
pub use error::DomainError;
pub use ids::{BookId, CharacterId, UserId};
