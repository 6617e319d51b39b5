//! Narrative Generator - deterministic text built from one entity and its
//! graph neighborhood.
//!
//! Every renderer is a pure read of the casebook. Renderers anchored on an
//! entity fail with `NotFound` when it does not exist; whole-casebook
//! renderers return empty output when there is nothing to say.

mod leads;
mod report;

pub use report::*;

use case_rules::{Case, CaseId, Casebook, CharacterId, Result, Suspect, SuspectId};

use crate::query::QueryEngine;

/// Renders summaries, profiles, reports and leads for a casebook.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeGenerator<'a> {
    book: &'a Casebook,
    query: QueryEngine<'a>,
}

impl<'a> NarrativeGenerator<'a> {
    pub fn new(book: &'a Casebook) -> Self {
        Self {
            book,
            query: QueryEngine::new(book),
        }
    }

    /// One paragraph: title, status, priority and who is involved.
    pub fn case_summary(&self, id: CaseId) -> Result<String> {
        let case = self.query.case(id)?;
        let suspects = self.book.graph().suspects_of_case(id).count();
        let characters = self.book.graph().characters_of_case(id).count();

        let mut summary = format!(
            "Case #{}: \"{}\" is {} with {} priority.",
            case.id,
            case.title,
            case.status.label(),
            case.priority.label()
        );
        if !case.location.is_empty() {
            summary.push_str(&format!(" The incident took place at {}.", case.location));
        }
        summary.push_str(&format!(
            " The investigation involves {} and {}.",
            counted(suspects, "suspect"),
            counted(characters, "character")
        ));
        Ok(summary)
    }

    /// Several paragraphs: overview, suspects by suspicion, characters,
    /// evidence and, once solved, the solution.
    pub fn case_analysis(&self, id: CaseId) -> Result<String> {
        let case = self.query.case(id)?;
        let mut suspects = self.query.suspects_of_case(id)?;
        suspects.sort_by(|a, b| {
            b.suspicion_level
                .total_cmp(&a.suspicion_level)
                .then(a.id.cmp(&b.id))
        });
        let characters = self.query.characters_of_case(id)?;

        let mut sections = Vec::new();

        let mut overview = format!(
            "Analysis of \"{}\" ({}, {} priority).",
            case.title,
            case.status.label(),
            case.priority.label()
        );
        if !case.description.is_empty() {
            overview.push(' ');
            overview.push_str(&case.description);
        }
        sections.push(overview);

        if suspects.is_empty() {
            sections.push("No suspects have been identified.".to_string());
        } else {
            let mut section = String::from("Suspects, most suspicious first:");
            for suspect in &suspects {
                section.push_str(&format!(
                    "\n- {} (suspicion {:.1}, {}): motive: {}; alibi strength: {}",
                    suspect.name,
                    suspect.suspicion_level,
                    suspect.classification().label(),
                    or_unknown(&suspect.motive),
                    suspect.alibi_strength.label()
                ));
            }
            sections.push(section);
        }

        if characters.is_empty() {
            sections.push("No other characters are involved.".to_string());
        } else {
            let present: Vec<String> = characters
                .iter()
                .map(|c| format!("{} ({})", c.name, c.role.label()))
                .collect();
            sections.push(format!("Characters present: {}.", present.join(", ")));
        }

        if !case.evidence.is_empty() {
            sections.push(format!("Evidence: {}.", case.evidence.join("; ")));
        }

        if case.is_solved() && !case.solution.is_empty() {
            sections.push(format!("Solution: {}", case.solution));
        }

        Ok(sections.join("\n\n"))
    }

    /// Background, motive, alibi, classification and linked cases.
    pub fn suspect_profile(&self, id: SuspectId) -> Result<String> {
        let suspect = self.query.suspect(id)?;
        let cases = self.query.cases_of_suspect(id)?;

        let mut lines = vec![identity_line(suspect)];
        if !suspect.background.is_empty() {
            lines.push(format!("Background: {}", suspect.background));
        }
        lines.push(format!("Motive: {}", or_unknown(&suspect.motive)));
        lines.push(format!(
            "Alibi: {} ({})",
            if suspect.has_alibi() {
                suspect.alibi.as_str()
            } else {
                "none given"
            },
            suspect.alibi_strength.label()
        ));
        lines.push(format!(
            "Classification: {} (suspicion {:.1}, {})",
            suspect.classification().label(),
            suspect.suspicion_level,
            suspect.suspicion_band().label()
        ));
        lines.push(linked_cases_line(&cases));

        Ok(lines.join("\n"))
    }

    /// Role, story and linked cases.
    pub fn character_introduction(&self, id: CharacterId) -> Result<String> {
        let character = self.query.character(id)?;
        let cases = self.query.cases_of_character(id)?;

        let mut intro = format!("{} ({})", character.name, character.role.label());
        if !character.story.is_empty() {
            intro.push_str(&format!(": {}", character.story));
        }
        Ok(format!("{intro}\n{}", linked_cases_line(&cases)))
    }
}

fn identity_line(suspect: &Suspect) -> String {
    let mut line = format!("{}, age {}", suspect.name, suspect.age);
    if !suspect.occupation.is_empty() {
        line.push_str(&format!(", {}", suspect.occupation));
    }
    if !suspect.last_known_location.is_empty() {
        line.push_str(&format!(", last seen at {}", suspect.last_known_location));
    }
    line
}

fn linked_cases_line(cases: &[&Case]) -> String {
    if cases.is_empty() {
        return "Not linked to any case.".to_string();
    }
    let titles: Vec<&str> = cases.iter().map(|c| c.title.as_str()).collect();
    format!("Linked cases: {}", titles.join(", "))
}

fn or_unknown(text: &str) -> &str {
    if text.trim().is_empty() {
        "unknown"
    } else {
        text
    }
}

/// "1 suspect", "3 suspects".
fn counted(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_rules::{
        AlibiStrength, CaseStatus, CharacterRole, EntityKind, Error, Link, NewCase, NewCharacter,
        NewSuspect, Priority,
    };

    fn museum() -> (Casebook, CaseId, SuspectId, CharacterId) {
        let mut book = Casebook::new();
        let case = book
            .create_case(
                NewCase::new("The Museum Heist")
                    .with_location("City Museum")
                    .with_priority(Priority::High)
                    .with_evidence("Cut alarm wire"),
            )
            .unwrap();
        let vincent = book
            .create_suspect(
                NewSuspect::new("Vincent Moreau")
                    .with_age(52)
                    .with_occupation("Art dealer")
                    .with_motive("Gambling debts")
                    .with_suspicion_level(60.0),
            )
            .unwrap();
        let clara = book
            .create_suspect(
                NewSuspect::new("Clara Voss")
                    .with_alibi("At the gala", AlibiStrength::Strong)
                    .with_suspicion_level(60.0),
            )
            .unwrap();
        let guard = book
            .create_character(
                NewCharacter::new("Night Guard", CharacterRole::Witness)
                    .with_story("Heard glass breaking at midnight"),
            )
            .unwrap();
        book.link(Link::CaseSuspect(case, clara));
        book.link(Link::CaseSuspect(case, vincent));
        book.link(Link::CaseCharacter(case, guard));
        (book, case, vincent, guard)
    }

    #[test]
    fn test_case_summary() {
        let (book, case, _, _) = museum();
        let summary = NarrativeGenerator::new(&book).case_summary(case).unwrap();
        assert_eq!(
            summary,
            "Case #1: \"The Museum Heist\" is Open with High priority. \
             The incident took place at City Museum. \
             The investigation involves 2 suspects and 1 character."
        );
    }

    #[test]
    fn test_case_analysis_ranks_ties_by_id() {
        let (book, case, _, _) = museum();
        let analysis = NarrativeGenerator::new(&book).case_analysis(case).unwrap();

        let vincent = analysis.find("Vincent Moreau").unwrap();
        let clara = analysis.find("Clara Voss").unwrap();
        assert!(vincent < clara);
        assert!(analysis.contains("motive: Gambling debts"));
        assert!(analysis.contains("alibi strength: Strong"));
        assert!(analysis.contains("Night Guard (Witness)"));
        assert!(analysis.contains("Evidence: Cut alarm wire."));
    }

    #[test]
    fn test_case_analysis_without_links() {
        let mut book = Casebook::new();
        let case = book
            .create_case(NewCase::new("Quiet Case").with_status(CaseStatus::Cold))
            .unwrap();
        let analysis = NarrativeGenerator::new(&book).case_analysis(case).unwrap();
        assert!(analysis.contains("No suspects have been identified."));
        assert!(analysis.contains("No other characters are involved."));
    }

    #[test]
    fn test_suspect_profile() {
        let (book, _, vincent, _) = museum();
        let profile = NarrativeGenerator::new(&book).suspect_profile(vincent).unwrap();
        assert!(profile.starts_with("Vincent Moreau, age 52, Art dealer"));
        assert!(profile.contains("Alibi: none given (None)"));
        assert!(profile.contains("Classification: Unassessed (suspicion 60.0, High)"));
        assert!(profile.contains("Linked cases: The Museum Heist"));
    }

    #[test]
    fn test_character_introduction() {
        let (book, _, _, guard) = museum();
        let intro = NarrativeGenerator::new(&book)
            .character_introduction(guard)
            .unwrap();
        assert_eq!(
            intro,
            "Night Guard (Witness): Heard glass breaking at midnight\n\
             Linked cases: The Museum Heist"
        );
    }

    #[test]
    fn test_unknown_anchor_is_not_found() {
        let book = Casebook::new();
        let narrative = NarrativeGenerator::new(&book);
        assert!(matches!(
            narrative.case_summary(CaseId(1)),
            Err(Error::NotFound { kind: EntityKind::Case, .. })
        ));
        assert!(matches!(
            narrative.suspect_profile(SuspectId(1)),
            Err(Error::NotFound { kind: EntityKind::Suspect, .. })
        ));
        assert!(matches!(
            narrative.character_introduction(CharacterId(1)),
            Err(Error::NotFound { kind: EntityKind::Character, .. })
        ));
    }
}
