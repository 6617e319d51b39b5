//! Investigative leads: next-step suggestions and gaps in the graph.

use case_rules::{AlibiStrength, Case, SuspectStatus};

use super::NarrativeGenerator;

impl NarrativeGenerator<'_> {
    /// Heuristic next steps. Case-scoped suggestions come first in case id
    /// order, then suspect-scoped ones in suspect id order.
    pub fn suggest_next_steps(&self) -> Vec<String> {
        let mut steps = Vec::new();

        for case in self.book.cases().filter(|c| !c.is_solved()) {
            if self.book.graph().suspects_of_case(case.id).next().is_none() {
                steps.push(format!("identify suspects for {}", case.title));
            }
            if case.priority.is_high() && !self.has_detective(case) {
                steps.push(format!("assign detective to {}", case.title));
            }
        }

        for suspect in self.book.suspects() {
            if suspect.alibi_strength == AlibiStrength::None
                && suspect.status == SuspectStatus::Uninvestigated
            {
                steps.push(format!("investigate {}", suspect.name));
            }
        }

        steps
    }

    /// Gaps in the relationship graph, per case in id order:
    ///
    /// - a case with suspects but no linked detective;
    /// - a suspect on a case with characters, none of whom knows them.
    pub fn find_missing_connections(&self) -> Vec<String> {
        let graph = self.book.graph();
        let mut gaps = Vec::new();

        for case in self.book.cases() {
            let suspects: Vec<_> = graph.suspects_of_case(case.id).collect();
            if suspects.is_empty() {
                continue;
            }
            if !self.has_detective(case) {
                gaps.push(format!("{}: suspects linked but no detective assigned", case.title));
            }

            let characters: Vec<_> = graph.characters_of_case(case.id).collect();
            if characters.is_empty() {
                continue;
            }
            for suspect_id in suspects {
                let known = graph
                    .characters_knowing(suspect_id)
                    .any(|c| characters.contains(&c));
                if known {
                    continue;
                }
                if let Some(suspect) = self.book.suspect(suspect_id) {
                    gaps.push(format!(
                        "{}: {} is not known to any character on the case",
                        case.title, suspect.name
                    ));
                }
            }
        }

        gaps
    }

    fn has_detective(&self, case: &Case) -> bool {
        self.book
            .graph()
            .characters_of_case(case.id)
            .filter_map(|id| self.book.character(id))
            .any(|c| c.is_detective())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_rules::{
        CaseStatus, Casebook, CharacterRole, Link, NewCase, NewCharacter, NewSuspect, Priority,
        SuspectChanges,
    };

    #[test]
    fn test_next_steps_order() {
        let mut book = Casebook::new();
        book.create_case(NewCase::new("Quiet Case")).unwrap();
        let heist = book
            .create_case(NewCase::new("The Museum Heist").with_priority(Priority::Urgent))
            .unwrap();
        book.create_case(
            NewCase::new("Closed Case")
                .with_status(CaseStatus::Solved)
                .with_priority(Priority::High),
        )
        .unwrap();
        let vincent = book.create_suspect(NewSuspect::new("Vincent Moreau")).unwrap();
        book.link(Link::CaseSuspect(heist, vincent));

        let steps = NarrativeGenerator::new(&book).suggest_next_steps();
        assert_eq!(
            steps,
            vec![
                "identify suspects for Quiet Case",
                "assign detective to The Museum Heist",
                "investigate Vincent Moreau",
            ]
        );

        book.update_suspect(vincent, SuspectChanges::new().status(SuspectStatus::UnderInvestigation))
            .unwrap();
        let steps = NarrativeGenerator::new(&book).suggest_next_steps();
        assert!(!steps.iter().any(|s| s.starts_with("investigate")));
    }

    #[test]
    fn test_missing_detective_and_acquaintance() {
        let mut book = Casebook::new();
        let heist = book.create_case(NewCase::new("The Museum Heist")).unwrap();
        let vincent = book.create_suspect(NewSuspect::new("Vincent Moreau")).unwrap();
        let clara = book.create_suspect(NewSuspect::new("Clara Voss")).unwrap();
        let guard = book
            .create_character(NewCharacter::new("Night Guard", CharacterRole::Witness))
            .unwrap();
        book.link(Link::CaseSuspect(heist, vincent));
        book.link(Link::CaseSuspect(heist, clara));
        book.link(Link::CaseCharacter(heist, guard));
        book.link(Link::CharacterSuspect(guard, clara));

        let gaps = NarrativeGenerator::new(&book).find_missing_connections();
        assert_eq!(
            gaps,
            vec![
                "The Museum Heist: suspects linked but no detective assigned",
                "The Museum Heist: Vincent Moreau is not known to any character on the case",
            ]
        );
    }

    #[test]
    fn test_case_without_suspects_has_no_gaps() {
        let mut book = Casebook::new();
        book.create_case(NewCase::new("Quiet Case")).unwrap();
        assert!(NarrativeGenerator::new(&book)
            .find_missing_connections()
            .is_empty());
    }
}
