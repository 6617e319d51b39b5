//! Flat key-value projections for external serialization.
//!
//! Enum fields are projected by symbolic name, timestamps as RFC 3339
//! strings. Derived booleans sit next to the stored fields.

use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};

use case_rules::{Case, CaseId, Casebook, Character, CharacterId, Result, Suspect, SuspectId};

use crate::query::QueryEngine;

/// Fields of one entity, with no graph context.
pub trait Projection {
    fn project(&self) -> Map<String, Value>;
}

impl Projection for Case {
    fn project(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("id".into(), json!(self.id.0));
        map.insert("title".into(), json!(self.title));
        map.insert("description".into(), json!(self.description));
        map.insert("location".into(), json!(self.location));
        map.insert("status".into(), json!(self.status.as_str()));
        map.insert("priority".into(), json!(self.priority.as_str()));
        map.insert("solution".into(), json!(self.solution));
        map.insert("notes".into(), json!(self.notes));
        map.insert("evidence".into(), json!(self.evidence));
        map.insert("tags".into(), json!(self.tags));
        map.insert("created_at".into(), json!(self.created_at.to_rfc3339()));
        map.insert(
            "incident_at".into(),
            json!(self.incident_at.map(|t| t.to_rfc3339())),
        );
        map.insert("is_solved".into(), json!(self.is_solved()));
        map
    }
}

impl Projection for Suspect {
    fn project(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("id".into(), json!(self.id.0));
        map.insert("name".into(), json!(self.name));
        map.insert("background".into(), json!(self.background));
        map.insert("story".into(), json!(self.story));
        map.insert("motive".into(), json!(self.motive));
        map.insert("alibi".into(), json!(self.alibi));
        map.insert("alibi_strength".into(), json!(self.alibi_strength.as_str()));
        map.insert("status".into(), json!(self.status.as_str()));
        map.insert("age".into(), json!(self.age));
        map.insert("occupation".into(), json!(self.occupation));
        map.insert("last_known_location".into(), json!(self.last_known_location));
        map.insert("suspicion_level".into(), json!(self.suspicion_level));
        map.insert("classification".into(), json!(self.classification().as_str()));
        map.insert("has_strong_alibi".into(), json!(self.has_strong_alibi()));
        map.insert("is_prime_suspect".into(), json!(self.is_prime_suspect()));
        map.insert("is_cleared".into(), json!(self.is_cleared()));
        map
    }
}

impl Projection for Character {
    fn project(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("id".into(), json!(self.id.0));
        map.insert("name".into(), json!(self.name));
        map.insert("role".into(), json!(self.role.as_str()));
        map.insert("story".into(), json!(self.story));
        map.insert("is_detective".into(), json!(self.is_detective()));
        map
    }
}

/// Projections enriched with linked ids and casebook-relative flags.
#[derive(Debug, Clone, Copy)]
pub struct Projector<'a> {
    book: &'a Casebook,
    query: QueryEngine<'a>,
}

impl<'a> Projector<'a> {
    pub fn new(book: &'a Casebook) -> Self {
        Self {
            book,
            query: QueryEngine::new(book),
        }
    }

    pub fn case(&self, id: CaseId) -> Result<Map<String, Value>> {
        self.case_at(id, Utc::now())
    }

    /// Like [`Projector::case`], with `now` as the cold-case reference time.
    pub fn case_at(&self, id: CaseId, now: DateTime<Utc>) -> Result<Map<String, Value>> {
        let case = self.query.case(id)?;
        let graph = self.book.graph();
        let mut map = case.project();
        map.insert(
            "is_cold_case".into(),
            json!(case.is_cold_case_at(now, self.book.config().cold_case_after_days)),
        );
        map.insert(
            "suspect_ids".into(),
            json!(graph.suspects_of_case(id).map(|s| s.0).collect::<Vec<_>>()),
        );
        map.insert(
            "character_ids".into(),
            json!(graph.characters_of_case(id).map(|c| c.0).collect::<Vec<_>>()),
        );
        Ok(map)
    }

    pub fn suspect(&self, id: SuspectId) -> Result<Map<String, Value>> {
        let suspect = self.query.suspect(id)?;
        let graph = self.book.graph();
        let mut map = suspect.project();
        map.insert(
            "case_ids".into(),
            json!(graph.cases_of_suspect(id).map(|c| c.0).collect::<Vec<_>>()),
        );
        map.insert(
            "known_character_ids".into(),
            json!(graph.characters_knowing(id).map(|c| c.0).collect::<Vec<_>>()),
        );
        Ok(map)
    }

    pub fn character(&self, id: CharacterId) -> Result<Map<String, Value>> {
        let character = self.query.character(id)?;
        let graph = self.book.graph();
        let mut map = character.project();
        map.insert(
            "case_ids".into(),
            json!(graph.cases_of_character(id).map(|c| c.0).collect::<Vec<_>>()),
        );
        map.insert(
            "known_suspect_ids".into(),
            json!(graph.suspects_known_by(id).map(|s| s.0).collect::<Vec<_>>()),
        );
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_rules::{
        AlibiStrength, CaseStatus, CharacterRole, Link, NewCase, NewCharacter, NewSuspect,
        Priority, SuspectStatus,
    };

    #[test]
    fn test_case_projection_uses_symbolic_names() {
        let mut book = Casebook::new();
        let id = book
            .create_case(
                NewCase::new("The Museum Heist")
                    .with_status(CaseStatus::InProgress)
                    .with_priority(Priority::Urgent),
            )
            .unwrap();

        let map = Projector::new(&book).case(id).unwrap();
        assert_eq!(map["id"], json!(1));
        assert_eq!(map["status"], json!("InProgress"));
        assert_eq!(map["priority"], json!("Urgent"));
        assert_eq!(map["is_solved"], json!(false));
        assert_eq!(map["is_cold_case"], json!(false));
        assert_eq!(map["incident_at"], Value::Null);
        assert_eq!(map["suspect_ids"], json!([]));
    }

    #[test]
    fn test_suspect_projection() {
        let mut book = Casebook::new();
        let case = book.create_case(NewCase::new("The Museum Heist")).unwrap();
        let id = book
            .create_suspect(
                NewSuspect::new("Vincent Moreau")
                    .with_alibi("At home", AlibiStrength::Confirmed)
                    .with_status(SuspectStatus::PrimeSuspect),
            )
            .unwrap();
        let guard = book
            .create_character(NewCharacter::new("Night Guard", CharacterRole::Witness))
            .unwrap();
        book.link(Link::CaseSuspect(case, id));
        book.link(Link::CharacterSuspect(guard, id));

        let map = Projector::new(&book).suspect(id).unwrap();
        assert_eq!(map["alibi_strength"], json!("Confirmed"));
        assert_eq!(map["status"], json!("PrimeSuspect"));
        assert_eq!(map["has_strong_alibi"], json!(true));
        assert_eq!(map["is_prime_suspect"], json!(true));
        assert_eq!(map["case_ids"], json!([1]));
        assert_eq!(map["known_character_ids"], json!([1]));

        let guard_map = Projector::new(&book).character(guard).unwrap();
        assert_eq!(guard_map["role"], json!("Witness"));
        assert_eq!(guard_map["known_suspect_ids"], json!([1]));
    }

    #[test]
    fn test_missing_entity() {
        let book = Casebook::new();
        assert!(Projector::new(&book).character(CharacterId(1)).is_err());
    }
}
