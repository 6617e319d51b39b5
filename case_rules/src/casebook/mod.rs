//! The casebook - the single owner of every case, suspect and character and
//! of the relationship graph between them.
//!
//! All writes go through [`Casebook`]. A write either applies completely or
//! leaves the casebook untouched and returns an error (or `false` for link
//! operations).

mod graph;
mod snapshot;

pub use graph::*;
pub use snapshot::*;

use chrono::Utc;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{debug, info};

use crate::config::CasebookConfig;
use crate::entities::{
    require_text, Case, CaseChanges, CaseId, Character, CharacterChanges, CharacterId, EntityKind,
    NewCase, NewCharacter, NewSuspect, Suspect, SuspectChanges, SuspectId,
};
use crate::error::{Error, Result};

/// In-memory investigation store.
#[derive(Debug, Clone)]
pub struct Casebook {
    config: CasebookConfig,

    cases: BTreeMap<CaseId, Case>,
    suspects: BTreeMap<SuspectId, Suspect>,
    characters: BTreeMap<CharacterId, Character>,

    /// Uniqueness indexes: key -> owning id.
    case_titles: HashMap<String, CaseId>,
    suspect_names: HashMap<String, SuspectId>,
    character_names: HashMap<String, CharacterId>,

    graph: RelationshipGraph,

    next_case_id: u64,
    next_suspect_id: u64,
    next_character_id: u64,
}

impl Default for Casebook {
    fn default() -> Self {
        Self::with_config(CasebookConfig::default())
    }
}

fn rejected(kind: EntityKind, err: Error) -> Error {
    debug!(%kind, error = %err, "write rejected");
    err
}

impl Casebook {
    /// Create an empty casebook with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CasebookConfig) -> Self {
        Self {
            config,
            cases: BTreeMap::new(),
            suspects: BTreeMap::new(),
            characters: BTreeMap::new(),
            case_titles: HashMap::new(),
            suspect_names: HashMap::new(),
            character_names: HashMap::new(),
            graph: RelationshipGraph::new(),
            next_case_id: 1,
            next_suspect_id: 1,
            next_character_id: 1,
        }
    }

    pub fn config(&self) -> &CasebookConfig {
        &self.config
    }

    /// Read access to the relationship graph.
    pub fn graph(&self) -> &RelationshipGraph {
        &self.graph
    }

    // Cases

    /// Create a case and return its fresh id.
    pub fn create_case(&mut self, new: NewCase) -> Result<CaseId> {
        let id = CaseId(self.next_case_id);
        let case = Case::from_new(id, new, Utc::now());
        case.validate(&self.config)
            .map_err(|err| rejected(EntityKind::Case, err))?;
        if self.case_titles.contains_key(&case.title) {
            return Err(rejected(
                EntityKind::Case,
                Error::duplicate(EntityKind::Case, case.title),
            ));
        }

        self.next_case_id += 1;
        self.case_titles.insert(case.title.clone(), id);
        info!(case_id = %id, title = %case.title, "case created");
        self.cases.insert(id, case);
        Ok(id)
    }

    pub fn case(&self, id: CaseId) -> Option<&Case> {
        self.cases.get(&id)
    }

    /// Exact match on title.
    pub fn case_by_title(&self, title: &str) -> Option<&Case> {
        self.case_titles.get(title).and_then(|id| self.cases.get(id))
    }

    /// Resolve a title to an id at the boundary. Fails if the title is stale.
    pub fn resolve_case(&self, title: &str) -> Result<CaseId> {
        self.case_by_title(title)
            .map(|c| c.id)
            .ok_or_else(|| Error::not_found(EntityKind::Case, title))
    }

    /// All cases in creation order.
    pub fn cases(&self) -> impl Iterator<Item = &Case> {
        self.cases.values()
    }

    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    /// Apply a field-change set. A title change must not collide with another
    /// live case.
    pub fn update_case(&mut self, id: CaseId, changes: CaseChanges) -> Result<()> {
        let current = self
            .cases
            .get(&id)
            .ok_or_else(|| Error::not_found(EntityKind::Case, id))?;
        let old_title = current.title.clone();
        let mut updated = current.clone();
        changes.apply_to(&mut updated);
        updated
            .validate(&self.config)
            .map_err(|err| rejected(EntityKind::Case, err))?;

        if updated.title != old_title {
            if let Some(other) = self.case_titles.get(&updated.title) {
                if *other != id {
                    return Err(rejected(
                        EntityKind::Case,
                        Error::duplicate(EntityKind::Case, updated.title),
                    ));
                }
            }
            unindex(&mut self.case_titles, &old_title, id);
            reindex(
                &mut self.case_titles,
                &old_title,
                self.cases
                    .values()
                    .filter(|c| c.id != id)
                    .map(|c| (&c.title, c.id)),
            );
            self.case_titles.insert(updated.title.clone(), id);
        }

        debug!(case_id = %id, "case updated");
        self.cases.insert(id, updated);
        Ok(())
    }

    /// Delete a case after unlinking it from everything. Returns `false` if
    /// the id is unknown.
    pub fn delete_case(&mut self, id: CaseId) -> bool {
        if !self.cases.contains_key(&id) {
            return false;
        }
        let unlinked = self.graph.detach(Node::Case(id));
        if let Some(case) = self.cases.remove(&id) {
            unindex(&mut self.case_titles, &case.title, id);
            reindex(&mut self.case_titles, &case.title, self.cases.values().map(|c| (&c.title, c.id)));
            info!(case_id = %id, title = %case.title, unlinked, "case deleted");
        }
        true
    }

    /// Append an evidence item. Returns `false` if the case already has it.
    pub fn add_evidence(&mut self, id: CaseId, item: impl Into<String>) -> Result<bool> {
        let item = item.into();
        require_text("evidence", &item, self.config.max_description_length)?;
        let case = self.case_mut(id)?;
        if case.has_evidence(&item) {
            return Ok(false);
        }
        case.evidence.push(item);
        Ok(true)
    }

    /// Returns `false` if the case did not have the item.
    pub fn remove_evidence(&mut self, id: CaseId, item: &str) -> Result<bool> {
        let case = self.case_mut(id)?;
        let before = case.evidence.len();
        case.evidence.retain(|e| e != item);
        Ok(case.evidence.len() != before)
    }

    /// Returns `false` if the case already has the tag.
    pub fn add_tag(&mut self, id: CaseId, tag: impl Into<String>) -> Result<bool> {
        let tag = tag.into();
        require_text("tag", &tag, self.config.max_name_length)?;
        Ok(self.case_mut(id)?.tags.insert(tag))
    }

    /// Returns `false` if the case did not have the tag.
    pub fn remove_tag(&mut self, id: CaseId, tag: &str) -> Result<bool> {
        Ok(self.case_mut(id)?.tags.remove(tag))
    }

    fn case_mut(&mut self, id: CaseId) -> Result<&mut Case> {
        self.cases
            .get_mut(&id)
            .ok_or_else(|| Error::not_found(EntityKind::Case, id))
    }

    // Suspects

    pub fn create_suspect(&mut self, new: NewSuspect) -> Result<SuspectId> {
        let id = SuspectId(self.next_suspect_id);
        let suspect = Suspect::from_new(id, new);
        suspect
            .validate(&self.config)
            .map_err(|err| rejected(EntityKind::Suspect, err))?;
        if self.suspect_names.contains_key(&suspect.name) {
            return Err(rejected(
                EntityKind::Suspect,
                Error::duplicate(EntityKind::Suspect, suspect.name),
            ));
        }

        self.next_suspect_id += 1;
        self.suspect_names.insert(suspect.name.clone(), id);
        info!(suspect_id = %id, name = %suspect.name, "suspect created");
        self.suspects.insert(id, suspect);
        Ok(id)
    }

    pub fn suspect(&self, id: SuspectId) -> Option<&Suspect> {
        self.suspects.get(&id)
    }

    pub fn suspect_by_name(&self, name: &str) -> Option<&Suspect> {
        self.suspect_names
            .get(name)
            .and_then(|id| self.suspects.get(id))
    }

    pub fn resolve_suspect(&self, name: &str) -> Result<SuspectId> {
        self.suspect_by_name(name)
            .map(|s| s.id)
            .ok_or_else(|| Error::not_found(EntityKind::Suspect, name))
    }

    /// All suspects in creation order.
    pub fn suspects(&self) -> impl Iterator<Item = &Suspect> {
        self.suspects.values()
    }

    pub fn suspect_count(&self) -> usize {
        self.suspects.len()
    }

    pub fn update_suspect(&mut self, id: SuspectId, changes: SuspectChanges) -> Result<()> {
        let current = self
            .suspects
            .get(&id)
            .ok_or_else(|| Error::not_found(EntityKind::Suspect, id))?;
        let old_name = current.name.clone();
        let mut updated = current.clone();
        changes.apply_to(&mut updated);
        updated
            .validate(&self.config)
            .map_err(|err| rejected(EntityKind::Suspect, err))?;

        if updated.name != old_name {
            if let Some(other) = self.suspect_names.get(&updated.name) {
                if *other != id {
                    return Err(rejected(
                        EntityKind::Suspect,
                        Error::duplicate(EntityKind::Suspect, updated.name),
                    ));
                }
            }
            unindex(&mut self.suspect_names, &old_name, id);
            reindex(
                &mut self.suspect_names,
                &old_name,
                self.suspects
                    .values()
                    .filter(|s| s.id != id)
                    .map(|s| (&s.name, s.id)),
            );
            self.suspect_names.insert(updated.name.clone(), id);
        }

        debug!(
            suspect_id = %id,
            suspicion = updated.suspicion_level,
            status = %updated.status,
            "suspect updated"
        );
        self.suspects.insert(id, updated);
        Ok(())
    }

    pub fn delete_suspect(&mut self, id: SuspectId) -> bool {
        if !self.suspects.contains_key(&id) {
            return false;
        }
        let unlinked = self.graph.detach(Node::Suspect(id));
        if let Some(suspect) = self.suspects.remove(&id) {
            unindex(&mut self.suspect_names, &suspect.name, id);
            reindex(
                &mut self.suspect_names,
                &suspect.name,
                self.suspects.values().map(|s| (&s.name, s.id)),
            );
            info!(suspect_id = %id, name = %suspect.name, unlinked, "suspect deleted");
        }
        true
    }

    // Characters

    pub fn create_character(&mut self, new: NewCharacter) -> Result<CharacterId> {
        let id = CharacterId(self.next_character_id);
        let character = Character::from_new(id, new);
        character
            .validate(&self.config)
            .map_err(|err| rejected(EntityKind::Character, err))?;
        if self.character_names.contains_key(&character.name) {
            return Err(rejected(
                EntityKind::Character,
                Error::duplicate(EntityKind::Character, character.name),
            ));
        }

        self.next_character_id += 1;
        self.character_names.insert(character.name.clone(), id);
        info!(character_id = %id, name = %character.name, role = %character.role, "character created");
        self.characters.insert(id, character);
        Ok(id)
    }

    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(&id)
    }

    pub fn character_by_name(&self, name: &str) -> Option<&Character> {
        self.character_names
            .get(name)
            .and_then(|id| self.characters.get(id))
    }

    pub fn resolve_character(&self, name: &str) -> Result<CharacterId> {
        self.character_by_name(name)
            .map(|c| c.id)
            .ok_or_else(|| Error::not_found(EntityKind::Character, name))
    }

    /// All characters in creation order.
    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.characters.values()
    }

    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    pub fn update_character(&mut self, id: CharacterId, changes: CharacterChanges) -> Result<()> {
        let current = self
            .characters
            .get(&id)
            .ok_or_else(|| Error::not_found(EntityKind::Character, id))?;
        let old_name = current.name.clone();
        let mut updated = current.clone();
        changes.apply_to(&mut updated);
        updated
            .validate(&self.config)
            .map_err(|err| rejected(EntityKind::Character, err))?;

        if updated.name != old_name {
            if let Some(other) = self.character_names.get(&updated.name) {
                if *other != id {
                    return Err(rejected(
                        EntityKind::Character,
                        Error::duplicate(EntityKind::Character, updated.name),
                    ));
                }
            }
            unindex(&mut self.character_names, &old_name, id);
            reindex(
                &mut self.character_names,
                &old_name,
                self.characters
                    .values()
                    .filter(|c| c.id != id)
                    .map(|c| (&c.name, c.id)),
            );
            self.character_names.insert(updated.name.clone(), id);
        }

        debug!(character_id = %id, "character updated");
        self.characters.insert(id, updated);
        Ok(())
    }

    pub fn delete_character(&mut self, id: CharacterId) -> bool {
        if !self.characters.contains_key(&id) {
            return false;
        }
        let unlinked = self.graph.detach(Node::Character(id));
        if let Some(character) = self.characters.remove(&id) {
            unindex(&mut self.character_names, &character.name, id);
            reindex(
                &mut self.character_names,
                &character.name,
                self.characters.values().map(|c| (&c.name, c.id)),
            );
            info!(character_id = %id, name = %character.name, unlinked, "character deleted");
        }
        true
    }

    // Relationships

    /// Whether the entity behind `node` is live.
    pub fn contains(&self, node: Node) -> bool {
        match node {
            Node::Case(id) => self.cases.contains_key(&id),
            Node::Suspect(id) => self.suspects.contains_key(&id),
            Node::Character(id) => self.characters.contains_key(&id),
        }
    }

    fn endpoints_exist(&self, link: Link) -> bool {
        let (a, b) = link.endpoints();
        self.contains(a) && self.contains(b)
    }

    /// Link two entities. Returns `false` if either does not exist; linking
    /// an already linked pair returns `true` and changes nothing.
    pub fn link(&mut self, link: Link) -> bool {
        if !self.endpoints_exist(link) {
            debug!(%link, "link rejected: missing endpoint");
            return false;
        }
        if self.graph.insert(link) {
            debug!(%link, "linked");
        }
        true
    }

    /// Remove a link. Returns `false` if the pair was not linked or either
    /// entity does not exist.
    pub fn unlink(&mut self, link: Link) -> bool {
        if !self.endpoints_exist(link) {
            return false;
        }
        let removed = self.graph.remove(link);
        if removed {
            debug!(%link, "unlinked");
        }
        removed
    }

    pub fn is_linked(&self, link: Link) -> bool {
        self.graph.contains(link)
    }

    /// Neighbors of `node` through one link kind.
    pub fn neighbors(&self, kind: LinkKind, node: Node) -> BTreeSet<Node> {
        self.graph.neighbors(kind, node)
    }
}

/// Drop `key` from an index only if it still points at `id`.
fn unindex<I: PartialEq>(index: &mut HashMap<String, I>, key: &str, id: I) {
    if index.get(key) == Some(&id) {
        index.remove(key);
    }
}

/// Point a freed key at another live holder, if an imported duplicate exists.
fn reindex<'a, I: Copy + 'a>(
    index: &mut HashMap<String, I>,
    key: &str,
    holders: impl Iterator<Item = (&'a String, I)>,
) {
    if index.contains_key(key) {
        return;
    }
    let mut holders = holders;
    if let Some((_, id)) = holders.find(|(k, _)| k.as_str() == key) {
        index.insert(key.to_string(), id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mechanics::{AlibiStrength, CaseStatus, CharacterRole, Priority};

    fn museum() -> NewCase {
        NewCase::new("The Museum Heist")
            .with_description("A Vermeer vanished overnight")
            .with_location("City Museum")
            .with_priority(Priority::High)
            .with_evidence("Cut alarm wire")
            .with_tag("art")
    }

    #[test]
    fn test_create_and_get_round_trip() {
        let mut book = Casebook::new();
        let new = museum();
        let id = book.create_case(new.clone()).unwrap();

        let case = book.case(id).unwrap();
        assert_eq!(case.id, id);
        assert_eq!(case.title, new.title);
        assert_eq!(case.description, new.description);
        assert_eq!(case.location, new.location);
        assert_eq!(case.status, CaseStatus::Open);
        assert_eq!(case.priority, Priority::High);
        assert_eq!(case.evidence, new.evidence);
        assert_eq!(case.tags, new.tags);
        assert_eq!(case.incident_at, None);
    }

    #[test]
    fn test_ids_are_monotonic_and_never_reused() {
        let mut book = Casebook::new();
        let first = book.create_case(NewCase::new("One")).unwrap();
        assert!(book.delete_case(first));
        let second = book.create_case(NewCase::new("One")).unwrap();

        assert_eq!(first, CaseId(1));
        assert_eq!(second, CaseId(2));
        assert!(book.case(first).is_none());
    }

    #[test]
    fn test_failed_create_does_not_consume_id() {
        let mut book = Casebook::new();
        assert!(book.create_suspect(NewSuspect::new("")).is_err());
        let id = book.create_suspect(NewSuspect::new("Vincent Moreau")).unwrap();
        assert_eq!(id, SuspectId(1));
    }

    #[test]
    fn test_duplicate_title_rejected() {
        let mut book = Casebook::new();
        book.create_case(museum()).unwrap();
        let err = book.create_case(NewCase::new("The Museum Heist")).unwrap_err();
        assert!(matches!(err, Error::DuplicateKey { kind: EntityKind::Case, .. }));
        assert_eq!(book.case_count(), 1);
    }

    #[test]
    fn test_update_title_collision_leaves_state() {
        let mut book = Casebook::new();
        let a = book.create_case(NewCase::new("Alpha")).unwrap();
        book.create_case(NewCase::new("Beta")).unwrap();

        let err = book
            .update_case(a, CaseChanges::new().title("Beta").notes("changed"))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateKey { .. }));
        assert_eq!(book.case(a).unwrap().title, "Alpha");
        assert_eq!(book.case(a).unwrap().notes, "");
        assert_eq!(book.case_by_title("Beta").unwrap().title, "Beta");
    }

    #[test]
    fn test_update_name_collisions_rejected() {
        let mut book = Casebook::new();
        let vincent = book.create_suspect(NewSuspect::new("Vincent Moreau")).unwrap();
        book.create_suspect(NewSuspect::new("Ada Finch")).unwrap();
        let err = book
            .update_suspect(vincent, SuspectChanges::new().name("Ada Finch").age(40))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateKey { kind: EntityKind::Suspect, .. }));
        assert_eq!(book.suspect(vincent).unwrap().name, "Vincent Moreau");
        assert_eq!(book.resolve_suspect("Ada Finch").unwrap(), SuspectId(2));

        let guard = book
            .create_character(NewCharacter::new("Night Guard", CharacterRole::Witness))
            .unwrap();
        book.create_character(NewCharacter::new("Inspector Lestrade", CharacterRole::Detective))
            .unwrap();
        let err = book
            .update_character(guard, CharacterChanges::new().name("Inspector Lestrade"))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateKey { kind: EntityKind::Character, .. }));
        assert_eq!(book.character(guard).unwrap().name, "Night Guard");
    }

    #[test]
    fn test_update_title_reindexes() {
        let mut book = Casebook::new();
        let id = book.create_case(NewCase::new("Alpha")).unwrap();
        book.update_case(id, CaseChanges::new().title("Gamma")).unwrap();

        assert!(book.case_by_title("Alpha").is_none());
        assert_eq!(book.resolve_case("Gamma").unwrap(), id);
        assert!(matches!(
            book.resolve_case("Alpha"),
            Err(Error::NotFound { kind: EntityKind::Case, .. })
        ));

        // Re-using the freed title is allowed.
        assert!(book.create_case(NewCase::new("Alpha")).is_ok());
    }

    #[test]
    fn test_update_to_own_title_is_allowed() {
        let mut book = Casebook::new();
        let id = book.create_case(NewCase::new("Alpha")).unwrap();
        book.update_case(id, CaseChanges::new().title("Alpha")).unwrap();
        assert_eq!(book.case(id).unwrap().title, "Alpha");
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut book = Casebook::new();
        let err = book
            .update_suspect(SuspectId(4), SuspectChanges::new().age(30))
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { kind: EntityKind::Suspect, .. }));
    }

    #[test]
    fn test_update_invalid_suspicion_rejected() {
        let mut book = Casebook::new();
        let id = book.create_suspect(NewSuspect::new("Vincent Moreau")).unwrap();
        let err = book
            .update_suspect(id, SuspectChanges::new().suspicion_level(150.0))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(book.suspect(id).unwrap().suspicion_level, 0.0);
    }

    #[test]
    fn test_list_in_creation_order() {
        let mut book = Casebook::new();
        book.create_character(NewCharacter::new("Zed", CharacterRole::Witness)).unwrap();
        book.create_character(NewCharacter::new("Amy", CharacterRole::Officer)).unwrap();

        let names: Vec<&str> = book.characters().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
    }

    #[test]
    fn test_link_requires_existing_entities() {
        let mut book = Casebook::new();
        let case = book.create_case(museum()).unwrap();
        assert!(!book.link(Link::CaseSuspect(case, SuspectId(99))));
        assert_eq!(book.graph().edge_count(), 0);
    }

    #[test]
    fn test_unlink_requires_existing_entities() {
        let mut book = Casebook::new();
        let case = book.create_case(museum()).unwrap();
        let suspect = book.create_suspect(NewSuspect::new("Vincent Moreau")).unwrap();
        book.link(Link::CaseSuspect(case, suspect));

        assert!(!book.unlink(Link::CaseSuspect(case, SuspectId(99))));
        assert!(!book.unlink(Link::CaseSuspect(CaseId(42), suspect)));
        assert!(!book.unlink(Link::CharacterSuspect(CharacterId(7), suspect)));
        assert_eq!(book.graph().edge_count(), 1);
    }

    #[test]
    fn test_link_idempotent_and_unlink() {
        let mut book = Casebook::new();
        let case = book.create_case(museum()).unwrap();
        let suspect = book.create_suspect(NewSuspect::new("Vincent Moreau")).unwrap();
        let link = Link::CaseSuspect(case, suspect);

        assert!(book.link(link));
        assert!(book.link(link));
        assert_eq!(book.graph().edge_count(), 1);
        assert!(book.is_linked(link));

        assert!(book.unlink(link));
        assert!(!book.unlink(link));
        assert!(!book.is_linked(link));
    }

    #[test]
    fn test_delete_cascades() {
        let mut book = Casebook::new();
        let case = book.create_case(museum()).unwrap();
        let suspect = book.create_suspect(NewSuspect::new("Vincent Moreau")).unwrap();
        let detective = book
            .create_character(NewCharacter::new("Inspector Lestrade", CharacterRole::Detective))
            .unwrap();
        book.link(Link::CaseSuspect(case, suspect));
        book.link(Link::CaseCharacter(case, detective));
        book.link(Link::CharacterSuspect(detective, suspect));

        assert!(book.delete_suspect(suspect));
        assert!(!book.delete_suspect(suspect));

        for kind in LinkKind::ALL {
            assert!(!book
                .neighbors(kind, Node::Case(case))
                .contains(&Node::Suspect(suspect)));
            assert!(!book
                .neighbors(kind, Node::Character(detective))
                .contains(&Node::Suspect(suspect)));
        }
        assert_eq!(book.graph().edge_count(), 1);
        assert!(book.suspect_by_name("Vincent Moreau").is_none());
    }

    #[test]
    fn test_evidence_and_tags() {
        let mut book = Casebook::new();
        let id = book.create_case(museum()).unwrap();

        assert!(!book.add_evidence(id, "Cut alarm wire").unwrap());
        assert!(book.add_evidence(id, "Muddy footprint").unwrap());
        assert_eq!(
            book.case(id).unwrap().evidence,
            vec!["Cut alarm wire".to_string(), "Muddy footprint".to_string()]
        );
        assert!(book.remove_evidence(id, "Cut alarm wire").unwrap());
        assert!(!book.remove_evidence(id, "Cut alarm wire").unwrap());

        assert!(book.add_tag(id, "insider").unwrap());
        assert!(!book.add_tag(id, "insider").unwrap());
        assert!(book.remove_tag(id, "art").unwrap());
        assert!(matches!(book.add_tag(id, " "), Err(Error::InvalidInput(_))));
        assert!(matches!(
            book.add_tag(CaseId(42), "x"),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn test_suspect_round_trip() {
        let mut book = Casebook::new();
        let new = NewSuspect::new("Vincent Moreau")
            .with_age(52)
            .with_occupation("Art dealer")
            .with_motive("Gambling debts")
            .with_alibi("Claims he was at the opera", AlibiStrength::Weak)
            .with_suspicion_level(40.0);
        let id = book.create_suspect(new.clone()).unwrap();

        let suspect = book.suspect(id).unwrap();
        assert_eq!(suspect.name, new.name);
        assert_eq!(suspect.age, 52);
        assert_eq!(suspect.occupation, new.occupation);
        assert_eq!(suspect.motive, new.motive);
        assert_eq!(suspect.alibi, new.alibi);
        assert_eq!(suspect.alibi_strength, AlibiStrength::Weak);
        assert_eq!(suspect.suspicion_level, 40.0);
    }

    #[test]
    fn test_negative_age_rejected() {
        let mut book = Casebook::new();
        let err = book
            .create_suspect(NewSuspect::new("Nobody").with_age(-3))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
