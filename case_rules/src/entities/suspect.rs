//! Suspect definitions.

use serde::{Deserialize, Serialize};

use super::{limit_text, require_text, SuspectId};
use crate::config::CasebookConfig;
use crate::error::{Error, Result};
use crate::mechanics::{
    classify, is_valid_suspicion, AlibiStrength, Classification, SuspectStatus, SuspicionBand,
};

/// A person of investigative interest.
///
/// Linked cases and acquainted characters live in the
/// [`RelationshipGraph`](crate::RelationshipGraph).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suspect {
    pub id: SuspectId,
    /// Unique among live suspects.
    pub name: String,
    pub background: String,
    pub story: String,
    pub motive: String,
    pub alibi: String,
    pub alibi_strength: AlibiStrength,
    pub status: SuspectStatus,
    pub age: i32,
    pub occupation: String,
    pub last_known_location: String,
    /// 0.0 to 100.0, set by callers.
    pub suspicion_level: f64,
}

impl Suspect {
    pub(crate) fn from_new(id: SuspectId, new: NewSuspect) -> Self {
        Self {
            id,
            name: new.name,
            background: new.background,
            story: new.story,
            motive: new.motive,
            alibi: new.alibi,
            alibi_strength: new.alibi_strength,
            status: new.status,
            age: new.age,
            occupation: new.occupation,
            last_known_location: new.last_known_location,
            suspicion_level: new.suspicion_level,
        }
    }

    pub fn has_strong_alibi(&self) -> bool {
        self.alibi_strength.is_strong()
    }

    pub fn classification(&self) -> Classification {
        classify(self.suspicion_level, self.alibi_strength, self.status)
    }

    pub fn is_prime_suspect(&self) -> bool {
        self.classification() == Classification::PrimeSuspect
    }

    pub fn is_cleared(&self) -> bool {
        self.status.is_cleared()
    }

    pub fn suspicion_band(&self) -> SuspicionBand {
        SuspicionBand::from_level(self.suspicion_level)
    }

    pub fn has_motive(&self) -> bool {
        !self.motive.trim().is_empty()
    }

    pub fn has_alibi(&self) -> bool {
        !self.alibi.trim().is_empty()
    }

    /// Check every field against the configured limits.
    pub fn validate(&self, config: &CasebookConfig) -> Result<()> {
        require_text("name", &self.name, config.max_name_length)?;
        for (field, value) in [
            ("background", &self.background),
            ("story", &self.story),
            ("motive", &self.motive),
            ("alibi", &self.alibi),
        ] {
            limit_text(field, value, config.max_description_length)?;
        }
        limit_text("occupation", &self.occupation, config.max_name_length)?;
        limit_text(
            "last_known_location",
            &self.last_known_location,
            config.max_title_length,
        )?;
        if !(0..=config.max_age).contains(&self.age) {
            return Err(Error::invalid(format!(
                "age {} is outside 0..={}",
                self.age, config.max_age
            )));
        }
        if !is_valid_suspicion(self.suspicion_level) {
            return Err(Error::invalid(format!(
                "suspicion level {} is outside [0, 100]",
                self.suspicion_level
            )));
        }
        Ok(())
    }
}

/// Input for creating a suspect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewSuspect {
    pub name: String,
    pub background: String,
    pub story: String,
    pub motive: String,
    pub alibi: String,
    pub alibi_strength: AlibiStrength,
    pub status: SuspectStatus,
    pub age: i32,
    pub occupation: String,
    pub last_known_location: String,
    pub suspicion_level: f64,
}

impl NewSuspect {
    /// Create an uninvestigated suspect input with no alibi and zero suspicion.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    pub fn with_story(mut self, story: impl Into<String>) -> Self {
        self.story = story.into();
        self
    }

    pub fn with_motive(mut self, motive: impl Into<String>) -> Self {
        self.motive = motive.into();
        self
    }

    pub fn with_alibi(mut self, alibi: impl Into<String>, strength: AlibiStrength) -> Self {
        self.alibi = alibi.into();
        self.alibi_strength = strength;
        self
    }

    pub fn with_status(mut self, status: SuspectStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = occupation.into();
        self
    }

    pub fn with_last_known_location(mut self, location: impl Into<String>) -> Self {
        self.last_known_location = location.into();
        self
    }

    pub fn with_suspicion_level(mut self, level: f64) -> Self {
        self.suspicion_level = level;
        self
    }
}

/// Field-change set for [`Casebook::update_suspect`](crate::Casebook::update_suspect).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SuspectChanges {
    pub name: Option<String>,
    pub background: Option<String>,
    pub story: Option<String>,
    pub motive: Option<String>,
    pub alibi: Option<String>,
    pub alibi_strength: Option<AlibiStrength>,
    pub status: Option<SuspectStatus>,
    pub age: Option<i32>,
    pub occupation: Option<String>,
    pub last_known_location: Option<String>,
    pub suspicion_level: Option<f64>,
}

impl SuspectChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    pub fn story(mut self, story: impl Into<String>) -> Self {
        self.story = Some(story.into());
        self
    }

    pub fn motive(mut self, motive: impl Into<String>) -> Self {
        self.motive = Some(motive.into());
        self
    }

    pub fn alibi(mut self, alibi: impl Into<String>) -> Self {
        self.alibi = Some(alibi.into());
        self
    }

    pub fn alibi_strength(mut self, strength: AlibiStrength) -> Self {
        self.alibi_strength = Some(strength);
        self
    }

    pub fn status(mut self, status: SuspectStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = Some(occupation.into());
        self
    }

    pub fn last_known_location(mut self, location: impl Into<String>) -> Self {
        self.last_known_location = Some(location.into());
        self
    }

    pub fn suspicion_level(mut self, level: f64) -> Self {
        self.suspicion_level = Some(level);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply_to(self, suspect: &mut Suspect) {
        if let Some(name) = self.name {
            suspect.name = name;
        }
        if let Some(background) = self.background {
            suspect.background = background;
        }
        if let Some(story) = self.story {
            suspect.story = story;
        }
        if let Some(motive) = self.motive {
            suspect.motive = motive;
        }
        if let Some(alibi) = self.alibi {
            suspect.alibi = alibi;
        }
        if let Some(strength) = self.alibi_strength {
            suspect.alibi_strength = strength;
        }
        if let Some(status) = self.status {
            suspect.status = status;
        }
        if let Some(age) = self.age {
            suspect.age = age;
        }
        if let Some(occupation) = self.occupation {
            suspect.occupation = occupation;
        }
        if let Some(location) = self.last_known_location {
            suspect.last_known_location = location;
        }
        if let Some(level) = self.suspicion_level {
            suspect.suspicion_level = level;
        }
    }
}
