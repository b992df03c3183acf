//! Entities exchanged with the Storymaker backend.

mod book;
mod chapter;
mod character;
mod user;

pub use book::{Book, BOOK_DESCRIPTION_MAX_LEN, BOOK_NAME_MAX_LEN};
pub use chapter::{Chapter, CHAPTER_MAX};
pub use character::{Character, CharacterType, CHARACTER_DESCRIPTION_MAX_LEN, CHARACTER_NAME_MAX_LEN};
pub use user::UserProfile;

use crate::DomainError;

/// Shared length check; lengths are counted in characters, not bytes.
pub(crate) fn check_len(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), DomainError> {
    let len = value.chars().count();
    if len < min {
        return Err(DomainError::validation(
            field,
            format!("must be at least {min} characters"),
        ));
    }
    if len > max {
        return Err(DomainError::validation(
            field,
            format!("must be at most {max} characters"),
        ));
    }
    Ok(())
}
