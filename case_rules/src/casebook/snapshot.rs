//! Whole-casebook snapshots.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{Casebook, Link};
use crate::config::CasebookConfig;
use crate::entities::{Case, Character, Suspect};

/// Everything a casebook holds, in id order. Serializable with any serde
/// format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CasebookSnapshot {
    pub cases: Vec<Case>,
    pub suspects: Vec<Suspect>,
    pub characters: Vec<Character>,
    pub links: Vec<Link>,
}

impl Casebook {
    pub fn export(&self) -> CasebookSnapshot {
        CasebookSnapshot {
            cases: self.cases.values().cloned().collect(),
            suspects: self.suspects.values().cloned().collect(),
            characters: self.characters.values().cloned().collect(),
            links: self.graph.links().collect(),
        }
    }

    /// Rebuild a casebook from a snapshot.
    ///
    /// Import is lenient: records are taken as they are, so a hand-edited
    /// snapshot may carry duplicate keys, invalid fields or links to missing
    /// entities. Run an integrity check afterwards to find them. New ids
    /// continue after the largest imported id of each kind.
    pub fn import(config: CasebookConfig, snapshot: CasebookSnapshot) -> Self {
        let mut book = Casebook::with_config(config);

        for case in snapshot.cases {
            let id = case.id;
            book.case_titles.entry(case.title.clone()).or_insert(id);
            book.next_case_id = book.next_case_id.max(id.0 + 1);
            if book.cases.insert(id, case).is_some() {
                warn!(case_id = %id, "snapshot repeats case id, keeping the last record");
            }
        }
        for suspect in snapshot.suspects {
            let id = suspect.id;
            book.suspect_names.entry(suspect.name.clone()).or_insert(id);
            book.next_suspect_id = book.next_suspect_id.max(id.0 + 1);
            if book.suspects.insert(id, suspect).is_some() {
                warn!(suspect_id = %id, "snapshot repeats suspect id, keeping the last record");
            }
        }
        for character in snapshot.characters {
            let id = character.id;
            book.character_names
                .entry(character.name.clone())
                .or_insert(id);
            book.next_character_id = book.next_character_id.max(id.0 + 1);
            if book.characters.insert(id, character).is_some() {
                warn!(character_id = %id, "snapshot repeats character id, keeping the last record");
            }
        }
        for link in snapshot.links {
            book.graph.insert(link);
        }

        info!(
            cases = book.cases.len(),
            suspects = book.suspects.len(),
            characters = book.characters.len(),
            links = book.graph.edge_count(),
            "casebook imported"
        );
        book
    }
}
