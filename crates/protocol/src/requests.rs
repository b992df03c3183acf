//! Request bodies

use serde::{Deserialize, Serialize};
use storymaker_domain::{Chapter, Character, CharacterType};

/// Body of `POST /api/books`.
///
/// Characters are sent fully materialized. `main_character` is optional on
/// the wire because the client sends whatever it could resolve; the backend
/// rejects a book without one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBookRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_character: Option<Character>,
    #[serde(default)]
    pub side_characters: Vec<Character>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// Body of `POST /api/characters`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCharacterRequest {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: CharacterType,
    #[serde(default)]
    pub description: String,
}

/// Body of `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(default)]
    pub password: String,
}
