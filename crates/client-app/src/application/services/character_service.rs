//! Character Service - list, fetch and create characters

use storymaker_client_ports::outbound::ApiError;
use storymaker_domain::Character;
use storymaker_protocol::{routes, ApiResponse, CharacterCreated, CreateCharacterRequest};

use super::DEV_AUTHORIZATION;
use crate::application::Api;

#[derive(Clone)]
pub struct CharacterService {
    api: Api,
}

impl CharacterService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub async fn list_characters(&self) -> Result<ApiResponse<Vec<Character>>, ApiError> {
        self.api.get(routes::CHARACTERS, Some(DEV_AUTHORIZATION)).await
    }

    pub async fn get_character(
        &self,
        character_id: &str,
    ) -> Result<ApiResponse<Character>, ApiError> {
        self.api
            .get(&routes::character(character_id), Some(DEV_AUTHORIZATION))
            .await
    }

    pub async fn create_character(
        &self,
        request: &CreateCharacterRequest,
    ) -> Result<ApiResponse<CharacterCreated>, ApiError> {
        self.api
            .post(routes::CHARACTERS, request, Some(DEV_AUTHORIZATION))
            .await
    }
}
