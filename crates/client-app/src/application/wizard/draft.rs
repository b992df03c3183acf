//! Book draft - the form state the wizard accumulates

use std::collections::BTreeSet;

use storymaker_domain::{Character, CharacterId};
use storymaker_protocol::CreateBookRequest;

/// What the user has entered so far.
///
/// The main character id is never also a side character id; the mutators
/// keep that true, which is why the id fields are private.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub name: String,
    pub description: String,
    main_character_id: Option<CharacterId>,
    side_character_ids: BTreeSet<CharacterId>,
}

impl BookDraft {
    pub fn main_character_id(&self) -> Option<&CharacterId> {
        self.main_character_id.as_ref()
    }

    pub fn side_character_ids(&self) -> &BTreeSet<CharacterId> {
        &self.side_character_ids
    }

    pub fn is_side_character(&self, id: &str) -> bool {
        self.side_character_ids.contains(id)
    }

    pub fn set_main_character(&mut self, id: CharacterId) {
        self.side_character_ids.remove(&id);
        self.main_character_id = Some(id);
    }

    pub fn clear_main_character(&mut self) {
        self.main_character_id = None;
    }

    /// Add or remove a side character. Returns false when `id` is the main character.
    pub fn toggle_side_character(&mut self, id: CharacterId) -> bool {
        if self.main_character_id.as_ref() == Some(&id) {
            return false;
        }
        if !self.side_character_ids.remove(&id) {
            self.side_character_ids.insert(id);
        }
        true
    }

    /// Name and main character are the only required fields.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && self.main_character_id.is_some()
    }

    /// Resolve ids against the loaded characters and build the create payload.
    ///
    /// Ids with no matching character are dropped. Side characters keep the
    /// order of `characters`, not the order they were picked in.
    pub fn to_request(&self, characters: &[Character]) -> CreateBookRequest {
        let main_character = self
            .main_character_id
            .as_ref()
            .and_then(|id| characters.iter().find(|c| &c.id == id))
            .cloned();

        let side_characters = characters
            .iter()
            .filter(|c| self.side_character_ids.contains(&c.id))
            .filter(|c| Some(&c.id) != self.main_character_id.as_ref())
            .cloned()
            .collect();

        CreateBookRequest {
            name: self.name.clone(),
            description: self.description.clone(),
            main_character,
            side_characters,
            chapters: Vec::new(),
        }
    }
}
