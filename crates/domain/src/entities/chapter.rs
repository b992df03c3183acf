//! Chapter entity - one page/scene of a finished book

use serde::{Deserialize, Serialize};

use super::check_len;
use crate::DomainError;

/// Front page plus scenes; chapter numbers run from 1 to this value.
pub const CHAPTER_MAX: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub chapter: u8,
    pub title: String,
    pub scene: String,
    pub key_visual: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

impl Chapter {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.chapter == 0 || self.chapter > CHAPTER_MAX {
            return Err(DomainError::validation(
                "chapter",
                format!("must be between 1 and {CHAPTER_MAX}"),
            ));
        }
        check_len("title", &self.title, 0, 50)?;
        check_len("scene", &self.scene, 0, 300)?;
        check_len("key_visual", &self.key_visual, 0, 300)?;
        if let Some(caption) = &self.caption {
            check_len("caption", caption, 0, 120)?;
        }
        Ok(())
    }
}
