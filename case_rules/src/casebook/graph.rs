//! Relationship Graph - symmetric many-to-many links between entities.
//!
//! Every link kind keeps a forward and a backward index. Both are written
//! together by the same call, so a link visible from one side is always
//! visible from the other.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};
use std::fmt;

use crate::entities::{CaseId, CharacterId, EntityKind, SuspectId};

/// The three kinds of relationship edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LinkKind {
    /// A suspect is linked to a case.
    CaseSuspect,
    /// A character is linked to a case.
    CaseCharacter,
    /// A character knows a suspect.
    CharacterSuspect,
}

impl LinkKind {
    pub const ALL: [LinkKind; 3] = [
        LinkKind::CaseSuspect,
        LinkKind::CaseCharacter,
        LinkKind::CharacterSuspect,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::CaseSuspect => "CaseSuspect",
            LinkKind::CaseCharacter => "CaseCharacter",
            LinkKind::CharacterSuspect => "CharacterSuspect",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One relationship edge, typed by its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Link {
    CaseSuspect(CaseId, SuspectId),
    CaseCharacter(CaseId, CharacterId),
    CharacterSuspect(CharacterId, SuspectId),
}

impl Link {
    pub fn kind(&self) -> LinkKind {
        match self {
            Link::CaseSuspect(..) => LinkKind::CaseSuspect,
            Link::CaseCharacter(..) => LinkKind::CaseCharacter,
            Link::CharacterSuspect(..) => LinkKind::CharacterSuspect,
        }
    }

    pub fn endpoints(&self) -> (Node, Node) {
        match *self {
            Link::CaseSuspect(c, s) => (Node::Case(c), Node::Suspect(s)),
            Link::CaseCharacter(c, ch) => (Node::Case(c), Node::Character(ch)),
            Link::CharacterSuspect(ch, s) => (Node::Character(ch), Node::Suspect(s)),
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.endpoints();
        write!(f, "{} <-> {}", a, b)
    }
}

/// Any entity, as a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Node {
    Case(CaseId),
    Suspect(SuspectId),
    Character(CharacterId),
}

impl Node {
    pub fn kind(&self) -> EntityKind {
        match self {
            Node::Case(_) => EntityKind::Case,
            Node::Suspect(_) => EntityKind::Suspect,
            Node::Character(_) => EntityKind::Character,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Case(id) => write!(f, "case {}", id),
            Node::Suspect(id) => write!(f, "suspect {}", id),
            Node::Character(id) => write!(f, "character {}", id),
        }
    }
}

/// Forward and backward index for one link kind.
#[derive(Debug, Clone)]
struct Adjacency<A, B> {
    forward: BTreeMap<A, BTreeSet<B>>,
    backward: BTreeMap<B, BTreeSet<A>>,
}

impl<A, B> Default for Adjacency<A, B> {
    fn default() -> Self {
        Self {
            forward: BTreeMap::new(),
            backward: BTreeMap::new(),
        }
    }
}

impl<A: Ord + Copy, B: Ord + Copy> Adjacency<A, B> {
    /// Returns `true` if the pair was not linked before.
    fn insert(&mut self, a: A, b: B) -> bool {
        let added = self.forward.entry(a).or_default().insert(b);
        self.backward.entry(b).or_default().insert(a);
        added
    }

    /// Returns `true` if the pair was linked.
    fn remove(&mut self, a: A, b: B) -> bool {
        let removed = remove_member(&mut self.forward, &a, &b);
        remove_member(&mut self.backward, &b, &a);
        removed
    }

    fn contains(&self, a: A, b: B) -> bool {
        self.forward.get(&a).is_some_and(|set| set.contains(&b))
    }

    fn from_left(&self, a: A) -> impl Iterator<Item = B> + '_ {
        self.forward.get(&a).into_iter().flatten().copied()
    }

    fn from_right(&self, b: B) -> impl Iterator<Item = A> + '_ {
        self.backward.get(&b).into_iter().flatten().copied()
    }

    fn detach_left(&mut self, a: A) -> usize {
        let Some(partners) = self.forward.remove(&a) else {
            return 0;
        };
        for b in &partners {
            remove_member(&mut self.backward, b, &a);
        }
        partners.len()
    }

    fn detach_right(&mut self, b: B) -> usize {
        let Some(partners) = self.backward.remove(&b) else {
            return 0;
        };
        for a in &partners {
            remove_member(&mut self.forward, a, &b);
        }
        partners.len()
    }

    fn len(&self) -> usize {
        self.forward.values().map(BTreeSet::len).sum()
    }

    fn pairs(&self) -> impl Iterator<Item = (A, B)> + '_ {
        self.forward
            .iter()
            .flat_map(|(a, bs)| bs.iter().map(move |b| (*a, *b)))
    }

    /// Pairs present in only one of the two indexes.
    fn one_sided(&self) -> Vec<(A, B)> {
        let mut pairs: Vec<(A, B)> = self
            .pairs()
            .filter(|(a, b)| !self.backward.get(b).is_some_and(|set| set.contains(a)))
            .collect();
        for (b, as_) in &self.backward {
            for a in as_ {
                if !self.contains(*a, *b) {
                    pairs.push((*a, *b));
                }
            }
        }
        pairs
    }
}

fn remove_member<K: Ord, V: Ord>(map: &mut BTreeMap<K, BTreeSet<V>>, key: &K, value: &V) -> bool {
    let Some(set) = map.get_mut(key) else {
        return false;
    };
    let removed = set.remove(value);
    if set.is_empty() {
        map.remove(key);
    }
    removed
}

/// All relationship edges of a casebook.
///
/// The graph does not know which entities exist. Existence checks belong to
/// the [`Casebook`](super::Casebook), which is the only writer.
#[derive(Debug, Clone, Default)]
pub struct RelationshipGraph {
    case_suspect: Adjacency<CaseId, SuspectId>,
    case_character: Adjacency<CaseId, CharacterId>,
    character_suspect: Adjacency<CharacterId, SuspectId>,
}

impl RelationshipGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the link was not present before.
    pub(crate) fn insert(&mut self, link: Link) -> bool {
        match link {
            Link::CaseSuspect(c, s) => self.case_suspect.insert(c, s),
            Link::CaseCharacter(c, ch) => self.case_character.insert(c, ch),
            Link::CharacterSuspect(ch, s) => self.character_suspect.insert(ch, s),
        }
    }

    /// Returns `true` if the link was present.
    pub(crate) fn remove(&mut self, link: Link) -> bool {
        match link {
            Link::CaseSuspect(c, s) => self.case_suspect.remove(c, s),
            Link::CaseCharacter(c, ch) => self.case_character.remove(c, ch),
            Link::CharacterSuspect(ch, s) => self.character_suspect.remove(ch, s),
        }
    }

    /// Remove every edge touching `node`. Returns the number removed.
    pub(crate) fn detach(&mut self, node: Node) -> usize {
        match node {
            Node::Case(c) => self.case_suspect.detach_left(c) + self.case_character.detach_left(c),
            Node::Suspect(s) => {
                self.case_suspect.detach_right(s) + self.character_suspect.detach_right(s)
            }
            Node::Character(ch) => {
                self.case_character.detach_right(ch) + self.character_suspect.detach_left(ch)
            }
        }
    }

    pub fn contains(&self, link: Link) -> bool {
        match link {
            Link::CaseSuspect(c, s) => self.case_suspect.contains(c, s),
            Link::CaseCharacter(c, ch) => self.case_character.contains(c, ch),
            Link::CharacterSuspect(ch, s) => self.character_suspect.contains(ch, s),
        }
    }

    /// Suspects linked to a case, ascending.
    pub fn suspects_of_case(&self, case: CaseId) -> impl Iterator<Item = SuspectId> + '_ {
        self.case_suspect.from_left(case)
    }

    /// Characters linked to a case, ascending.
    pub fn characters_of_case(&self, case: CaseId) -> impl Iterator<Item = CharacterId> + '_ {
        self.case_character.from_left(case)
    }

    /// Cases a suspect is linked to, ascending.
    pub fn cases_of_suspect(&self, suspect: SuspectId) -> impl Iterator<Item = CaseId> + '_ {
        self.case_suspect.from_right(suspect)
    }

    /// Cases a character is linked to, ascending.
    pub fn cases_of_character(&self, character: CharacterId) -> impl Iterator<Item = CaseId> + '_ {
        self.case_character.from_right(character)
    }

    /// Suspects a character knows, ascending.
    pub fn suspects_known_by(&self, character: CharacterId) -> impl Iterator<Item = SuspectId> + '_ {
        self.character_suspect.from_left(character)
    }

    /// Characters who know a suspect, ascending.
    pub fn characters_knowing(&self, suspect: SuspectId) -> impl Iterator<Item = CharacterId> + '_ {
        self.character_suspect.from_right(suspect)
    }

    /// Neighbors of `node` through one link kind. Empty when the kind does
    /// not apply to the node's entity type.
    pub fn neighbors(&self, kind: LinkKind, node: Node) -> BTreeSet<Node> {
        match (kind, node) {
            (LinkKind::CaseSuspect, Node::Case(c)) => {
                self.suspects_of_case(c).map(Node::Suspect).collect()
            }
            (LinkKind::CaseSuspect, Node::Suspect(s)) => {
                self.cases_of_suspect(s).map(Node::Case).collect()
            }
            (LinkKind::CaseCharacter, Node::Case(c)) => {
                self.characters_of_case(c).map(Node::Character).collect()
            }
            (LinkKind::CaseCharacter, Node::Character(ch)) => {
                self.cases_of_character(ch).map(Node::Case).collect()
            }
            (LinkKind::CharacterSuspect, Node::Character(ch)) => {
                self.suspects_known_by(ch).map(Node::Suspect).collect()
            }
            (LinkKind::CharacterSuspect, Node::Suspect(s)) => {
                self.characters_knowing(s).map(Node::Character).collect()
            }
            _ => BTreeSet::new(),
        }
    }

    /// Neighbors of `node` across every link kind, in node order.
    pub fn all_neighbors(&self, node: Node) -> BTreeSet<Node> {
        LinkKind::ALL
            .iter()
            .flat_map(|kind| self.neighbors(*kind, node))
            .collect()
    }

    /// Total number of edges, each counted once.
    pub fn edge_count(&self) -> usize {
        self.case_suspect.len() + self.case_character.len() + self.character_suspect.len()
    }

    pub fn edge_count_of(&self, kind: LinkKind) -> usize {
        match kind {
            LinkKind::CaseSuspect => self.case_suspect.len(),
            LinkKind::CaseCharacter => self.case_character.len(),
            LinkKind::CharacterSuspect => self.character_suspect.len(),
        }
    }

    /// Every edge, grouped by kind, each pair once.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let case_suspect = self
            .case_suspect
            .pairs()
            .map(|(c, s)| Link::CaseSuspect(c, s));
        let case_character = self
            .case_character
            .pairs()
            .map(|(c, ch)| Link::CaseCharacter(c, ch));
        let character_suspect = self
            .character_suspect
            .pairs()
            .map(|(ch, s)| Link::CharacterSuspect(ch, s));
        case_suspect.chain(case_character).chain(character_suspect)
    }

    /// Links stored on only one side. Always empty for a graph built through
    /// this type's own writers.
    pub fn one_sided_links(&self) -> Vec<Link> {
        let mut links: Vec<Link> = Vec::new();
        links.extend(
            self.case_suspect
                .one_sided()
                .into_iter()
                .map(|(c, s)| Link::CaseSuspect(c, s)),
        );
        links.extend(
            self.case_character
                .one_sided()
                .into_iter()
                .map(|(c, ch)| Link::CaseCharacter(c, ch)),
        );
        links.extend(
            self.character_suspect
                .one_sided()
                .into_iter()
                .map(|(ch, s)| Link::CharacterSuspect(ch, s)),
        );
        links
    }

    /// Shortest path between two nodes over all link kinds, both endpoints
    /// included. `None` when unreachable.
    pub fn shortest_path(&self, from: Node, to: Node) -> Option<Vec<Node>> {
        if from == to {
            return Some(vec![from]);
        }

        let mut parents: BTreeMap<Node, Node> = BTreeMap::new();
        let mut visited: HashSet<Node> = HashSet::from([from]);
        let mut queue = VecDeque::from([from]);

        while let Some(current) = queue.pop_front() {
            for next in self.all_neighbors(current) {
                if !visited.insert(next) {
                    continue;
                }
                parents.insert(next, current);
                if next == to {
                    let mut path = vec![to];
                    let mut step = to;
                    while let Some(parent) = parents.get(&step) {
                        path.push(*parent);
                        step = *parent;
                    }
                    path.reverse();
                    return Some(path);
                }
                queue.push_back(next);
            }
        }

        None
    }

    /// Suspects reachable from `start` through shared cases or shared
    /// acquaintances, within `max_depth` suspect-to-suspect hops.
    ///
    /// Returns `(suspect, depth)` ordered by depth, then id. The start
    /// suspect is excluded.
    pub fn connected_suspects(&self, start: SuspectId, max_depth: usize) -> Vec<(SuspectId, usize)> {
        let mut found = Vec::new();
        let mut visited: HashSet<SuspectId> = HashSet::from([start]);
        let mut frontier = vec![start];

        for depth in 1..=max_depth {
            let mut next_frontier: BTreeSet<SuspectId> = BTreeSet::new();
            for suspect in &frontier {
                for case in self.cases_of_suspect(*suspect) {
                    next_frontier.extend(self.suspects_of_case(case));
                }
                for character in self.characters_knowing(*suspect) {
                    next_frontier.extend(self.suspects_known_by(character));
                }
            }
            next_frontier.retain(|s| visited.insert(*s));
            if next_frontier.is_empty() {
                break;
            }
            found.extend(next_frontier.iter().map(|s| (*s, depth)));
            frontier = next_frontier.into_iter().collect();
        }

        found
    }
}
