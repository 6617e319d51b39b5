//! Text search fields and matching.

use serde::{Deserialize, Serialize};

use case_rules::{Case, Character, Suspect};

/// Searchable text fields of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseField {
    Title,
    Description,
    Location,
    Notes,
    Solution,
}

impl CaseField {
    pub const ALL: &'static [CaseField] = &[
        CaseField::Title,
        CaseField::Description,
        CaseField::Location,
        CaseField::Notes,
        CaseField::Solution,
    ];

    pub fn value<'a>(&self, case: &'a Case) -> &'a str {
        match self {
            CaseField::Title => &case.title,
            CaseField::Description => &case.description,
            CaseField::Location => &case.location,
            CaseField::Notes => &case.notes,
            CaseField::Solution => &case.solution,
        }
    }
}

/// Searchable text fields of a suspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuspectField {
    Name,
    Background,
    Story,
    Motive,
    Occupation,
}

impl SuspectField {
    pub const ALL: &'static [SuspectField] = &[
        SuspectField::Name,
        SuspectField::Background,
        SuspectField::Story,
        SuspectField::Motive,
        SuspectField::Occupation,
    ];

    pub fn value<'a>(&self, suspect: &'a Suspect) -> &'a str {
        match self {
            SuspectField::Name => &suspect.name,
            SuspectField::Background => &suspect.background,
            SuspectField::Story => &suspect.story,
            SuspectField::Motive => &suspect.motive,
            SuspectField::Occupation => &suspect.occupation,
        }
    }
}

/// Searchable text fields of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterField {
    Name,
    Story,
}

impl CharacterField {
    pub const ALL: &'static [CharacterField] = &[CharacterField::Name, CharacterField::Story];

    pub fn value<'a>(&self, character: &'a Character) -> &'a str {
        match self {
            CharacterField::Name => &character.name,
            CharacterField::Story => &character.story,
        }
    }
}

/// A normalized search needle. `None` for blank queries, which match
/// nothing.
pub(crate) struct Needle(String);

impl Needle {
    pub(crate) fn parse(query: &str) -> Option<Self> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Needle(trimmed.to_lowercase()))
        }
    }

    pub(crate) fn found_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }
}

/// Matches across every entity type.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults<'a> {
    pub cases: Vec<&'a Case>,
    pub suspects: Vec<&'a Suspect>,
    pub characters: Vec<&'a Character>,
}

impl SearchResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty() && self.suspects.is_empty() && self.characters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cases.len() + self.suspects.len() + self.characters.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_needle() {
        assert!(Needle::parse("").is_none());
        assert!(Needle::parse(" \t\n").is_none());
    }

    #[test]
    fn test_needle_is_case_insensitive() {
        let needle = Needle::parse("  VERMEER ").unwrap();
        assert!(needle.found_in("A stolen Vermeer"));
        assert!(!needle.found_in("A stolen Rembrandt"));
    }
}
