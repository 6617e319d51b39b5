//! Character definitions.

use serde::{Deserialize, Serialize};

use super::{limit_text, require_text, CharacterId};
use crate::config::CasebookConfig;
use crate::error::Result;
use crate::mechanics::CharacterRole;

/// A non-suspect participant: witness, detective, victim and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    /// Unique among live characters.
    pub name: String,
    pub role: CharacterRole,
    pub story: String,
}

impl Character {
    pub(crate) fn from_new(id: CharacterId, new: NewCharacter) -> Self {
        Self {
            id,
            name: new.name,
            role: new.role,
            story: new.story,
        }
    }

    pub fn is_detective(&self) -> bool {
        self.role == CharacterRole::Detective
    }

    pub fn validate(&self, config: &CasebookConfig) -> Result<()> {
        require_text("name", &self.name, config.max_name_length)?;
        limit_text("story", &self.story, config.max_description_length)
    }
}

/// Input for creating a character.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewCharacter {
    pub name: String,
    pub role: CharacterRole,
    pub story: String,
}

impl NewCharacter {
    pub fn new(name: impl Into<String>, role: CharacterRole) -> Self {
        Self {
            name: name.into(),
            role,
            story: String::new(),
        }
    }

    pub fn with_story(mut self, story: impl Into<String>) -> Self {
        self.story = story.into();
        self
    }
}

/// Field-change set for [`Casebook::update_character`](crate::Casebook::update_character).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CharacterChanges {
    pub name: Option<String>,
    pub role: Option<CharacterRole>,
    pub story: Option<String>,
}

impl CharacterChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn role(mut self, role: CharacterRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn story(mut self, story: impl Into<String>) -> Self {
        self.story = Some(story.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply_to(self, character: &mut Character) {
        if let Some(name) = self.name {
            character.name = name;
        }
        if let Some(role) = self.role {
            character.role = role;
        }
        if let Some(story) = self.story {
            character.story = story;
        }
    }
}
