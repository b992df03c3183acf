//! Deterministic seed data for the simulated backend.

use chrono::{DateTime, Utc};
use storymaker_domain::{Book, BookId, Character, CharacterType, UserId, UserProfile};

/// 2025-01-01T00:00:00Z
pub fn seeded_at() -> DateTime<Utc> {
    DateTime::from_timestamp(1_735_689_600, 0).unwrap_or_default()
}

pub fn characters() -> Vec<Character> {
    vec![
        Character::new("c1", "Plushie Duck", CharacterType::Toy)
            .with_description("Soft yellow")
            .with_created_at(seeded_at()),
        Character::new("c2", "Mia", CharacterType::Child)
            .with_description("Six years old, loves puddles")
            .with_created_at(seeded_at()),
        Character::new("c3", "Grandpa Joe", CharacterType::Adult)
            .with_description("Tells the long version of every story")
            .with_created_at(seeded_at()),
    ]
}

pub fn books(characters: &[Character]) -> Vec<Book> {
    let (Some(duck), Some(mia)) = (characters.first(), characters.get(1)) else {
        return Vec::new();
    };
    vec![Book {
        id: BookId::new("b1"),
        name: "The Lost Button".to_string(),
        description: "Plushie Duck searches the house for a missing button.".to_string(),
        main_character: duck.clone(),
        side_characters: vec![mia.clone()],
        chapters: Vec::new(),
        created_at: seeded_at(),
    }]
}

/// The single development account the backend knows about.
pub fn dev_user() -> UserProfile {
    UserProfile {
        id: UserId::new("0000"),
        email: DEV_EMAIL.to_string(),
        display_name: "Dev User".to_string(),
    }
}

pub const DEV_EMAIL: &str = "dev@local";

/// Static credential accepted on book and character routes.
pub const DEV_CREDENTIAL: &str = "DEV";
