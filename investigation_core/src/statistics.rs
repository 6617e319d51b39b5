//! Summary counters over a casebook, computed on demand.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use case_rules::{Casebook, CharacterRole, LinkKind};

/// A read-only snapshot of casebook counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_cases: usize,
    pub solved_cases: usize,
    /// Cases not yet solved.
    pub open_cases: usize,
    pub cold_cases: usize,
    pub high_priority_cases: usize,

    pub total_suspects: usize,
    pub prime_suspects: usize,
    pub cleared_suspects: usize,
    /// 0.0 when there are no suspects.
    pub average_suspicion_level: f64,

    pub total_characters: usize,
    pub witnesses: usize,
    pub detectives: usize,
    /// Count per role, in role declaration order.
    pub characters_by_role: Vec<(CharacterRole, usize)>,

    /// Every edge counted once.
    pub total_links: usize,
    pub links_by_kind: Vec<(LinkKind, usize)>,
}

impl Statistics {
    pub fn collect(book: &Casebook) -> Self {
        Self::collect_at(book, Utc::now())
    }

    /// Collect with `now` as the reference time for cold-case detection.
    pub fn collect_at(book: &Casebook, now: DateTime<Utc>) -> Self {
        let cold_after = book.config().cold_case_after_days;

        let solved_cases = book.cases().filter(|c| c.is_solved()).count();
        let cold_cases = book
            .cases()
            .filter(|c| c.is_cold_case_at(now, cold_after))
            .count();
        let high_priority_cases = book.cases().filter(|c| c.priority.is_high()).count();

        let total_suspects = book.suspect_count();
        let suspicion_sum: f64 = book.suspects().map(|s| s.suspicion_level).sum();
        let average_suspicion_level = if total_suspects == 0 {
            0.0
        } else {
            suspicion_sum / total_suspects as f64
        };

        let characters_by_role: Vec<(CharacterRole, usize)> = CharacterRole::ALL
            .iter()
            .map(|role| (*role, book.characters().filter(|c| c.role == *role).count()))
            .collect();
        let role_count = |role: CharacterRole| {
            characters_by_role
                .iter()
                .find(|(r, _)| *r == role)
                .map_or(0, |(_, n)| *n)
        };

        let graph = book.graph();

        Self {
            total_cases: book.case_count(),
            solved_cases,
            open_cases: book.case_count() - solved_cases,
            cold_cases,
            high_priority_cases,
            total_suspects,
            prime_suspects: book.suspects().filter(|s| s.is_prime_suspect()).count(),
            cleared_suspects: book.suspects().filter(|s| s.is_cleared()).count(),
            average_suspicion_level,
            total_characters: book.character_count(),
            witnesses: role_count(CharacterRole::Witness),
            detectives: role_count(CharacterRole::Detective),
            characters_by_role,
            total_links: graph.edge_count(),
            links_by_kind: LinkKind::ALL
                .iter()
                .map(|kind| (*kind, graph.edge_count_of(*kind)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_rules::{CaseStatus, Link, NewCase, NewCharacter, NewSuspect, SuspectStatus};

    #[test]
    fn test_empty_casebook() {
        let stats = Statistics::collect(&Casebook::new());
        assert_eq!(stats.total_cases, 0);
        assert_eq!(stats.total_suspects, 0);
        assert_eq!(stats.average_suspicion_level, 0.0);
        assert_eq!(stats.total_links, 0);
        assert_eq!(stats.characters_by_role.len(), CharacterRole::ALL.len());
    }

    #[test]
    fn test_counts() {
        let mut book = Casebook::new();
        let heist = book.create_case(NewCase::new("The Museum Heist")).unwrap();
        book.create_case(NewCase::new("Gallery Forgery").with_status(CaseStatus::Solved))
            .unwrap();
        let vincent = book
            .create_suspect(NewSuspect::new("Vincent Moreau").with_suspicion_level(80.0))
            .unwrap();
        book.create_suspect(
            NewSuspect::new("Clara Voss")
                .with_suspicion_level(20.0)
                .with_status(SuspectStatus::Cleared),
        )
        .unwrap();
        let guard = book
            .create_character(NewCharacter::new("Night Guard", CharacterRole::Witness))
            .unwrap();
        book.create_character(NewCharacter::new("Inspector Lestrade", CharacterRole::Detective))
            .unwrap();
        book.link(Link::CaseSuspect(heist, vincent));
        book.link(Link::CaseCharacter(heist, guard));
        book.link(Link::CharacterSuspect(guard, vincent));

        let stats = Statistics::collect(&book);
        assert_eq!(stats.total_cases, 2);
        assert_eq!(stats.solved_cases, 1);
        assert_eq!(stats.open_cases, 1);
        assert_eq!(stats.prime_suspects, 1);
        assert_eq!(stats.cleared_suspects, 1);
        assert_eq!(stats.average_suspicion_level, 50.0);
        assert_eq!(stats.witnesses, 1);
        assert_eq!(stats.detectives, 1);
        assert_eq!(stats.total_links, 3);
        assert!(stats
            .links_by_kind
            .iter()
            .all(|(_, count)| *count == 1));
    }
}
