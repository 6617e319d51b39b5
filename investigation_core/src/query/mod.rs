//! Query Engine - filtered scans, neighborhood lookups and text search over
//! a [`Casebook`].
//!
//! Every filter returns entities in store order (id ascending) and an empty
//! vector when nothing matches. Only lookups anchored on a specific entity
//! can fail, with `NotFound`.

mod search;

pub use search::*;

use chrono::{DateTime, Utc};

use case_rules::{
    Case, CaseId, CaseStatus, Casebook, Character, CharacterId, CharacterRole, EntityKind, Error,
    Node, Priority, Result, Suspect, SuspectId, SuspectStatus,
};

/// Read-only queries over one casebook.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    book: &'a Casebook,
}

impl<'a> QueryEngine<'a> {
    pub fn new(book: &'a Casebook) -> Self {
        Self { book }
    }

    pub fn casebook(&self) -> &'a Casebook {
        self.book
    }

    // Anchors

    pub fn case(&self, id: CaseId) -> Result<&'a Case> {
        self.book
            .case(id)
            .ok_or_else(|| Error::not_found(EntityKind::Case, id))
    }

    pub fn suspect(&self, id: SuspectId) -> Result<&'a Suspect> {
        self.book
            .suspect(id)
            .ok_or_else(|| Error::not_found(EntityKind::Suspect, id))
    }

    pub fn character(&self, id: CharacterId) -> Result<&'a Character> {
        self.book
            .character(id)
            .ok_or_else(|| Error::not_found(EntityKind::Character, id))
    }

    // Filters

    pub fn cases_by_status(&self, status: CaseStatus) -> Vec<&'a Case> {
        self.book.cases().filter(|c| c.status == status).collect()
    }

    pub fn cases_by_priority(&self, priority: Priority) -> Vec<&'a Case> {
        self.book.cases().filter(|c| c.priority == priority).collect()
    }

    pub fn characters_by_role(&self, role: CharacterRole) -> Vec<&'a Character> {
        self.book.characters().filter(|c| c.role == role).collect()
    }

    pub fn suspects_by_status(&self, status: SuspectStatus) -> Vec<&'a Suspect> {
        self.book.suspects().filter(|s| s.status == status).collect()
    }

    /// Cases whose status is anything but `Solved`.
    pub fn unsolved_cases(&self) -> Vec<&'a Case> {
        self.book.cases().filter(|c| !c.is_solved()).collect()
    }

    /// Cases with `High` or `Urgent` priority.
    pub fn high_priority_cases(&self) -> Vec<&'a Case> {
        self.book.cases().filter(|c| c.priority.is_high()).collect()
    }

    pub fn prime_suspects(&self) -> Vec<&'a Suspect> {
        self.book.suspects().filter(|s| s.is_prime_suspect()).collect()
    }

    pub fn cleared_suspects(&self) -> Vec<&'a Suspect> {
        self.book.suspects().filter(|s| s.is_cleared()).collect()
    }

    /// Cold cases as of `now`, using the casebook's configured threshold.
    pub fn cold_cases_at(&self, now: DateTime<Utc>) -> Vec<&'a Case> {
        let days = self.book.config().cold_case_after_days;
        self.book
            .cases()
            .filter(|c| c.is_cold_case_at(now, days))
            .collect()
    }

    pub fn cold_cases(&self) -> Vec<&'a Case> {
        self.cold_cases_at(Utc::now())
    }

    /// The `n` most suspicious suspects, highest first, ties by id.
    pub fn top_suspects(&self, n: usize) -> Vec<&'a Suspect> {
        let mut ranked: Vec<&Suspect> = self.book.suspects().collect();
        ranked.sort_by(|a, b| {
            b.suspicion_level
                .total_cmp(&a.suspicion_level)
                .then(a.id.cmp(&b.id))
        });
        ranked.truncate(n);
        ranked
    }

    /// Suspects whose level lies in `min..=max`.
    pub fn suspects_in_suspicion_range(&self, min: f64, max: f64) -> Vec<&'a Suspect> {
        self.book
            .suspects()
            .filter(|s| s.suspicion_level >= min && s.suspicion_level <= max)
            .collect()
    }

    // Neighborhoods

    pub fn suspects_of_case(&self, id: CaseId) -> Result<Vec<&'a Suspect>> {
        self.case(id)?;
        Ok(self
            .book
            .graph()
            .suspects_of_case(id)
            .filter_map(|s| self.book.suspect(s))
            .collect())
    }

    pub fn characters_of_case(&self, id: CaseId) -> Result<Vec<&'a Character>> {
        self.case(id)?;
        Ok(self
            .book
            .graph()
            .characters_of_case(id)
            .filter_map(|c| self.book.character(c))
            .collect())
    }

    pub fn cases_of_suspect(&self, id: SuspectId) -> Result<Vec<&'a Case>> {
        self.suspect(id)?;
        Ok(self
            .book
            .graph()
            .cases_of_suspect(id)
            .filter_map(|c| self.book.case(c))
            .collect())
    }

    pub fn cases_of_character(&self, id: CharacterId) -> Result<Vec<&'a Case>> {
        self.character(id)?;
        Ok(self
            .book
            .graph()
            .cases_of_character(id)
            .filter_map(|c| self.book.case(c))
            .collect())
    }

    /// Suspects the character knows.
    pub fn suspects_known_by(&self, id: CharacterId) -> Result<Vec<&'a Suspect>> {
        self.character(id)?;
        Ok(self
            .book
            .graph()
            .suspects_known_by(id)
            .filter_map(|s| self.book.suspect(s))
            .collect())
    }

    /// Characters who know the suspect.
    pub fn characters_knowing(&self, id: SuspectId) -> Result<Vec<&'a Character>> {
        self.suspect(id)?;
        Ok(self
            .book
            .graph()
            .characters_knowing(id)
            .filter_map(|c| self.book.character(c))
            .collect())
    }

    /// Suspects reachable through shared cases or shared acquaintances,
    /// paired with their hop distance.
    pub fn connected_suspects(
        &self,
        id: SuspectId,
        max_depth: usize,
    ) -> Result<Vec<(&'a Suspect, usize)>> {
        self.suspect(id)?;
        Ok(self
            .book
            .graph()
            .connected_suspects(id, max_depth)
            .into_iter()
            .filter_map(|(s, depth)| self.book.suspect(s).map(|s| (s, depth)))
            .collect())
    }

    /// Shortest chain of links between two entities, both included.
    pub fn shortest_path(&self, from: Node, to: Node) -> Result<Option<Vec<Node>>> {
        for node in [from, to] {
            if !self.book.contains(node) {
                return Err(Error::not_found(node.kind(), node));
            }
        }
        Ok(self.book.graph().shortest_path(from, to))
    }

    // Search

    /// Case-insensitive substring search. A blank query matches nothing.
    pub fn search_cases(&self, query: &str, fields: &[CaseField]) -> Vec<&'a Case> {
        let Some(needle) = Needle::parse(query) else {
            return Vec::new();
        };
        self.book
            .cases()
            .filter(|c| fields.iter().any(|f| needle.found_in(f.value(c))))
            .collect()
    }

    pub fn search_suspects(&self, query: &str, fields: &[SuspectField]) -> Vec<&'a Suspect> {
        let Some(needle) = Needle::parse(query) else {
            return Vec::new();
        };
        self.book
            .suspects()
            .filter(|s| fields.iter().any(|f| needle.found_in(f.value(s))))
            .collect()
    }

    pub fn search_characters(&self, query: &str, fields: &[CharacterField]) -> Vec<&'a Character> {
        let Some(needle) = Needle::parse(query) else {
            return Vec::new();
        };
        self.book
            .characters()
            .filter(|c| fields.iter().any(|f| needle.found_in(f.value(c))))
            .collect()
    }

    /// Search every text field of every entity type.
    pub fn search(&self, query: &str) -> SearchResults<'a> {
        SearchResults {
            cases: self.search_cases(query, CaseField::ALL),
            suspects: self.search_suspects(query, SuspectField::ALL),
            characters: self.search_characters(query, CharacterField::ALL),
        }
    }
}
