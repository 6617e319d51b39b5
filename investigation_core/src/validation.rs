//! Whole-casebook integrity checks.
//!
//! A casebook built only through its own writers always passes. Imported
//! snapshots are taken as given and may not.

use std::collections::BTreeMap;
use std::fmt::Display;

use tracing::warn;

use case_rules::{Casebook, Error, Result};

/// Outcome of one integrity pass. Issues are ordered by check, then by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityCheck {
    issues: Vec<String>,
}

impl IntegrityCheck {
    /// Check references, link symmetry, key uniqueness, field limits and the
    /// key indexes.
    pub fn run(book: &Casebook) -> Self {
        let mut issues = Vec::new();

        check_links(book, &mut issues);
        check_unique_keys(book, &mut issues);
        check_fields(book, &mut issues);
        check_key_index(book, &mut issues);

        if !issues.is_empty() {
            warn!(count = issues.len(), "casebook integrity check found issues");
        }
        Self { issues }
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Every problem found. Empty when valid.
    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    pub fn into_result(self) -> Result<()> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(Error::IntegrityViolation(self.issues.join("; ")))
        }
    }
}

/// Shorthand for `IntegrityCheck::run(book).is_valid()`.
pub fn validate(book: &Casebook) -> bool {
    IntegrityCheck::run(book).is_valid()
}

fn check_links(book: &Casebook, issues: &mut Vec<String>) {
    for link in book.graph().links() {
        let (a, b) = link.endpoints();
        match (book.contains(a), book.contains(b)) {
            (true, true) => {}
            (true, false) => issues.push(format!("{a} references nonexistent {b}")),
            (false, true) => issues.push(format!("{b} references nonexistent {a}")),
            (false, false) => {
                issues.push(format!("link {link} joins nonexistent {a} and {b}"))
            }
        }
    }

    for link in book.graph().one_sided_links() {
        issues.push(format!("link {link} is recorded on one side only"));
    }
}

fn check_unique_keys(book: &Casebook, issues: &mut Vec<String>) {
    report_duplicates(
        "title",
        "cases",
        book.cases().map(|c| (c.title.as_str(), c.id)),
        issues,
    );
    report_duplicates(
        "name",
        "suspects",
        book.suspects().map(|s| (s.name.as_str(), s.id)),
        issues,
    );
    report_duplicates(
        "name",
        "characters",
        book.characters().map(|c| (c.name.as_str(), c.id)),
        issues,
    );
}

fn report_duplicates<'a, I: Display>(
    key_name: &str,
    plural: &str,
    records: impl Iterator<Item = (&'a str, I)>,
    issues: &mut Vec<String>,
) {
    let mut by_key: BTreeMap<&str, Vec<I>> = BTreeMap::new();
    for (key, id) in records {
        by_key.entry(key).or_default().push(id);
    }
    for (key, ids) in by_key {
        if ids.len() > 1 {
            let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
            issues.push(format!(
                "duplicate {key_name} {key:?} across {plural} {}",
                ids.join(" and ")
            ));
        }
    }
}

fn check_fields(book: &Casebook, issues: &mut Vec<String>) {
    let config = book.config();
    for case in book.cases() {
        if let Err(err) = case.validate(config) {
            issues.push(format!("case {}: {err}", case.id));
        }
    }
    for suspect in book.suspects() {
        if let Err(err) = suspect.validate(config) {
            issues.push(format!("suspect {}: {err}", suspect.id));
        }
    }
    for character in book.characters() {
        if let Err(err) = character.validate(config) {
            issues.push(format!("character {}: {err}", character.id));
        }
    }
}

/// Every live key must resolve to a record carrying that key.
fn check_key_index(book: &Casebook, issues: &mut Vec<String>) {
    for case in book.cases() {
        if book.case_by_title(&case.title).map(|c| &c.title) != Some(&case.title) {
            issues.push(format!("case {} title {:?} is not indexed", case.id, case.title));
        }
    }
    for suspect in book.suspects() {
        if book.suspect_by_name(&suspect.name).map(|s| &s.name) != Some(&suspect.name) {
            issues.push(format!("suspect {} name {:?} is not indexed", suspect.id, suspect.name));
        }
    }
    for character in book.characters() {
        if book.character_by_name(&character.name).map(|c| &c.name) != Some(&character.name) {
            issues.push(format!(
                "character {} name {:?} is not indexed",
                character.id, character.name
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_rules::{
        CaseId, CasebookConfig, CasebookSnapshot, Link, NewCase, NewSuspect, SuspectId,
    };

    #[test]
    fn test_built_casebook_is_valid() {
        let mut book = Casebook::new();
        let case = book.create_case(NewCase::new("The Museum Heist")).unwrap();
        let suspect = book.create_suspect(NewSuspect::new("Vincent Moreau")).unwrap();
        book.link(Link::CaseSuspect(case, suspect));
        book.delete_suspect(suspect);

        let check = IntegrityCheck::run(&book);
        assert!(check.is_valid());
        assert!(check.issues().is_empty());
        assert!(check.into_result().is_ok());
    }

    #[test]
    fn test_dangling_link_reported() {
        let mut book = Casebook::new();
        book.create_case(NewCase::new("The Museum Heist")).unwrap();
        let mut snapshot = book.export();
        snapshot.links.push(Link::CaseSuspect(CaseId(1), SuspectId(9)));

        let imported = Casebook::import(CasebookConfig::default(), snapshot);
        assert!(!validate(&imported));
        let check = IntegrityCheck::run(&imported);
        assert_eq!(check.issues(), ["case 1 references nonexistent suspect 9"]);
    }

    #[test]
    fn test_duplicates_and_bad_fields_reported() {
        let mut book = Casebook::new();
        book.create_case(NewCase::new("Heist")).unwrap();
        book.create_case(NewCase::new("Other")).unwrap();
        book.create_suspect(NewSuspect::new("Vincent Moreau")).unwrap();

        let mut snapshot: CasebookSnapshot = book.export();
        snapshot.cases[1].title = "Heist".to_string();
        snapshot.suspects[0].suspicion_level = 140.0;

        let imported = Casebook::import(CasebookConfig::default(), snapshot);
        let check = IntegrityCheck::run(&imported);
        let issues = check.issues();

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0], "duplicate title \"Heist\" across cases 1 and 2");
        assert!(issues[1].starts_with("suspect 1: invalid input"));

        let err = check.into_result().unwrap_err();
        assert!(matches!(err, Error::IntegrityViolation(_)));
    }
}
