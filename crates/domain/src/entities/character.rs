//! Character entity - a protagonist or side character in a book

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::check_len;
use crate::{CharacterId, DomainError};

pub const CHARACTER_NAME_MAX_LEN: usize = 50;
pub const CHARACTER_DESCRIPTION_MAX_LEN: usize = 1_000;

/// What kind of figure a character is.
///
/// The backend treats this as an open string. Anything the client does not
/// know is kept verbatim in `Other` and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CharacterType {
    Adult,
    Child,
    #[default]
    Toy,
    Other(String),
}

impl CharacterType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Adult => "adult",
            Self::Child => "child",
            Self::Toy => "toy",
            Self::Other(raw) => raw,
        }
    }

    fn from_wire(raw: String) -> Self {
        match raw.as_str() {
            "adult" => Self::Adult,
            "child" => Self::Child,
            "toy" => Self::Toy,
            _ => Self::Other(raw),
        }
    }
}

impl fmt::Display for CharacterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts only the known types; used for user input, not for wire data.
impl FromStr for CharacterType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adult" => Ok(Self::Adult),
            "child" => Ok(Self::Child),
            "toy" => Ok(Self::Toy),
            other => Err(DomainError::parse(format!("unknown character type: {other}"))),
        }
    }
}

impl Serialize for CharacterType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CharacterType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from_wire)
    }
}

/// A character as stored by the backend.
///
/// The client never mutates characters; it reads them from a list fetch and
/// sends them back inside a book. Optional fields stay absent when the backend
/// omitted them, the timestamp keeps its original text, and keys the client
/// does not model are carried in `extra`, so a loaded character serializes to
/// the same JSON it was read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: CharacterType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Character {
    pub fn new(id: impl Into<CharacterId>, name: impl Into<String>, kind: CharacterType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            description: None,
            avatar_path: None,
            created_at: None,
            extra: Map::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at.to_rfc3339());
        self
    }

    /// Check the field limits the backend enforces on characters.
    pub fn validate(&self) -> Result<(), DomainError> {
        check_len("name", &self.name, 1, CHARACTER_NAME_MAX_LEN)?;
        check_len(
            "description",
            self.description.as_deref().unwrap_or_default(),
            0,
            CHARACTER_DESCRIPTION_MAX_LEN,
        )
    }
}
