//! Book aggregate - metadata, cast, and chapters

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{check_len, Chapter, Character};
use crate::common::datetime::flexible;
use crate::{BookId, DomainError};

pub const BOOK_NAME_MAX_LEN: usize = 80;
pub const BOOK_DESCRIPTION_MAX_LEN: usize = 400;

/// A created book as the backend stores it.
///
/// Characters are embedded in full, not by id; the main character never
/// appears among the side characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub main_character: Character,
    #[serde(default)]
    pub side_characters: Vec<Character>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    #[serde(with = "flexible")]
    pub created_at: DateTime<Utc>,
}

impl Book {
    /// Image of the first chapter, used as the cover in list views.
    pub fn cover_image(&self) -> Option<&str> {
        self.chapters.first().and_then(|c| c.image_path.as_deref())
    }

    pub fn page_count(&self) -> usize {
        self.chapters.len()
    }

    /// Check the field limits and structural rules the backend enforces.
    pub fn validate(&self) -> Result<(), DomainError> {
        check_len("name", &self.name, 1, BOOK_NAME_MAX_LEN)?;
        check_len("description", &self.description, 0, BOOK_DESCRIPTION_MAX_LEN)?;
        self.main_character.validate()?;

        if self
            .side_characters
            .iter()
            .any(|c| c.id == self.main_character.id)
        {
            return Err(DomainError::validation(
                "side_characters",
                "cannot include the main character",
            ));
        }

        for chapter in &self.chapters {
            chapter.validate()?;
        }
        let numbers: Vec<u8> = self.chapters.iter().map(|c| c.chapter).collect();
        if numbers.windows(2).any(|w| w[0] >= w[1]) {
            return Err(DomainError::validation(
                "chapters",
                "chapter numbers must be unique and sorted ascending",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CharacterType;
    use chrono::TimeZone;

    fn book() -> Book {
        Book {
            id: BookId::new("b1"),
            name: "Dawn".into(),
            description: String::new(),
            main_character: Character::new("c1", "Plushie Duck", CharacterType::Toy),
            side_characters: vec![Character::new("c2", "Mia", CharacterType::Child)],
            chapters: Vec::new(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn chapter(n: u8) -> Chapter {
        Chapter {
            chapter: n,
            title: format!("Scene {n}"),
            scene: "A quiet morning".into(),
            key_visual: "Sunrise".into(),
            caption: None,
            image_path: Some(format!("{n:02}.png")),
        }
    }

    #[test]
    fn valid_book_passes() {
        assert!(book().validate().is_ok());
    }

    #[test]
    fn name_limit_is_eighty_characters() {
        let mut b = book();
        b.name = "ä".repeat(80);
        assert!(b.validate().is_ok());
        b.name.push('x');
        assert_eq!(
            b.validate().unwrap_err().to_string(),
            "name: must be at most 80 characters"
        );
    }

    #[test]
    fn main_character_cannot_be_a_side_character() {
        let mut b = book();
        b.side_characters.push(b.main_character.clone());
        assert!(b.validate().is_err());
    }

    #[test]
    fn chapters_must_be_sorted_and_unique() {
        let mut b = book();
        b.chapters = vec![chapter(1), chapter(1)];
        assert!(b.validate().is_err());
        b.chapters = vec![chapter(2), chapter(1)];
        assert!(b.validate().is_err());
        b.chapters = vec![chapter(1), chapter(2)];
        assert!(b.validate().is_ok());
        assert_eq!(b.cover_image(), Some("01.png"));
        assert_eq!(b.page_count(), 2);
    }

    #[test]
    fn wire_roundtrip_keeps_created_at() {
        let b = book();
        let json = serde_json::to_value(&b).unwrap();
        assert_eq!(json["created_at"], "2025-01-01T00:00:00+00:00");
        let back: Book = serde_json::from_value(json).unwrap();
        assert_eq!(back, b);
    }
}
