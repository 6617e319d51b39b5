//! Entity definitions for an investigation.

mod case;
mod character;
mod suspect;

pub use case::*;
pub use character::*;
pub use suspect::*;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Identifier of a case. Assigned monotonically by the casebook, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(pub u64);

/// Identifier of a suspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuspectId(pub u64);

/// Identifier of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub u64);

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SuspectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Types of entities held by the casebook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Case,
    Suspect,
    Character,
}

impl EntityKind {
    /// Name of the uniqueness key for this kind.
    pub fn key_name(&self) -> &'static str {
        match self {
            EntityKind::Case => "title",
            EntityKind::Suspect | EntityKind::Character => "name",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Case => "case",
            EntityKind::Suspect => "suspect",
            EntityKind::Character => "character",
        })
    }
}

/// A required text field: must hold a non-whitespace character and fit the limit.
pub(crate) fn require_text(field: &str, value: &str, max_len: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid(format!("{field} must not be empty")));
    }
    limit_text(field, value, max_len)
}

/// An optional text field: may be empty but must fit the limit.
pub(crate) fn limit_text(field: &str, value: &str, max_len: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(Error::invalid(format!(
            "{field} is {len} characters long, limit is {max_len}"
        )));
    }
    Ok(())
}
