//! Route paths, relative to the configured base address.

pub const HEALTH: &str = "/api/health";
pub const BOOKS: &str = "/api/books";
pub const CHARACTERS: &str = "/api/characters";
pub const LOGIN: &str = "/api/login";
pub const ME: &str = "/api/me";

pub fn book(book_id: &str) -> String {
    format!("{BOOKS}/{book_id}")
}

pub fn character(character_id: &str) -> String {
    format!("{CHARACTERS}/{character_id}")
}
