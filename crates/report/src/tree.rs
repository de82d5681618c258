//! Arena-based proof tree: entities own proof items, items own attempts.
//!
//! Nodes live in a flat arena (`Vec<Node>`) and reference children by
//! [`NodeId`] index. The tree is built once by the loader through the
//! `add_*` methods and is read-only afterwards; the analysis engine only
//! ever traverses it through the borrowing iterators.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

/// Index of a node in the [`ProofTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Outcome reported for a single prover invocation.
///
/// Everything except `Valid` counts as failed time during aggregation.
/// Unrecognized outcome strings deserialize to [`Outcome::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Valid,
    Invalid,
    Timeout,
    Unknown,
    Other,
}

impl Outcome {
    /// Parse from a report string. Returns `Other` for unrecognized values.
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "Valid" => Self::Valid,
            "Invalid" => Self::Invalid,
            "Timeout" => Self::Timeout,
            "Unknown" => Self::Unknown,
            _ => Self::Other,
        }
    }

    /// Whether the prover discharged the obligation.
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_str_lossy(&s))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "Valid"),
            Self::Invalid => write!(f, "Invalid"),
            Self::Timeout => write!(f, "Timeout"),
            Self::Unknown => write!(f, "Unknown"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A provable program unit.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Fully-qualified unit name, e.g. `"Stacks.Push"`.
    pub name: String,
    items: Vec<NodeId>,
}

/// One verification condition, tied to a source location.
#[derive(Debug, Clone)]
pub struct ProofItem {
    /// Source file name exactly as spelled in the report.
    pub file: String,
    /// Line of the check in the source file.
    pub line: u32,
    /// Column of the check in the source file.
    pub column: u32,
    /// Check kind, e.g. `"VC_OVERFLOW_CHECK"`.
    pub rule: String,
    attempts: Vec<NodeId>,
}

/// Record of one prover invocation against a proof item.
#[derive(Debug, Clone)]
pub struct ProofAttempt {
    /// Prover identity, e.g. `"CVC4"` or `"Z3 4.8"`.
    pub prover: String,
    /// Reported outcome of the invocation.
    pub outcome: Outcome,
    /// Elapsed prover time. Non-negative by loader validation.
    pub time: Duration,
    /// Raw prover-reported step count, not comparable across provers.
    pub steps: u64,
}

/// A node in the proof tree arena.
#[derive(Debug, Clone)]
pub enum Node {
    Entity(Entity),
    Item(ProofItem),
    Attempt(ProofAttempt),
}

/// Strict ownership tree over all loaded report files.
///
/// Every item belongs to exactly one entity and every attempt to exactly
/// one item; child lists preserve insertion (invocation) order. Handing a
/// [`NodeId`] of the wrong kind to an accessor is a loader bug and panics.
#[derive(Debug, Clone, Default)]
pub struct ProofTree {
    nodes: Vec<Node>,
    entities: Vec<NodeId>,
}

impl ProofTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity and return its id.
    pub fn add_entity(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::Entity(Entity {
            name: name.into(),
            items: Vec::new(),
        }));
        self.entities.push(id);
        id
    }

    /// Append a proof item under `entity` and return its id.
    pub fn add_item(
        &mut self,
        entity: NodeId,
        file: impl Into<String>,
        line: u32,
        column: u32,
        rule: impl Into<String>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::Item(ProofItem {
            file: file.into(),
            line,
            column,
            rule: rule.into(),
            attempts: Vec::new(),
        }));
        match &mut self.nodes[entity.0] {
            Node::Entity(e) => e.items.push(id),
            Node::Item(_) | Node::Attempt(_) => {
                panic!("parent {entity:?} is not an entity")
            }
        }
        id
    }

    /// Append a proof attempt under `item` and return its id.
    pub fn add_attempt(&mut self, item: NodeId, attempt: ProofAttempt) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::Attempt(attempt));
        match &mut self.nodes[item.0] {
            Node::Item(i) => i.attempts.push(id),
            Node::Entity(_) | Node::Attempt(_) => {
                panic!("parent {item:?} is not a proof item")
            }
        }
        id
    }

    /// Total number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Whether the tree holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over all entities in insertion order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().map(|id| self.entity(*id))
    }

    /// Iterate over the proof items of `entity` in insertion order.
    pub fn items<'a>(&'a self, entity: &'a Entity) -> impl Iterator<Item = &'a ProofItem> {
        entity.items.iter().map(|id| self.item(*id))
    }

    /// Iterate over the attempts of `item` in invocation order.
    pub fn attempts<'a>(&'a self, item: &'a ProofItem) -> impl Iterator<Item = &'a ProofAttempt> {
        item.attempts.iter().map(|id| self.attempt(*id))
    }

    fn entity(&self, id: NodeId) -> &Entity {
        match &self.nodes[id.0] {
            Node::Entity(e) => e,
            Node::Item(_) | Node::Attempt(_) => panic!("node {id:?} is not an entity"),
        }
    }

    fn item(&self, id: NodeId) -> &ProofItem {
        match &self.nodes[id.0] {
            Node::Item(i) => i,
            Node::Entity(_) | Node::Attempt(_) => panic!("node {id:?} is not a proof item"),
        }
    }

    fn attempt(&self, id: NodeId) -> &ProofAttempt {
        match &self.nodes[id.0] {
            Node::Attempt(a) => a,
            Node::Entity(_) | Node::Item(_) => panic!("node {id:?} is not an attempt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(prover: &str, outcome: Outcome, secs: f64, steps: u64) -> ProofAttempt {
        ProofAttempt {
            prover: prover.to_string(),
            outcome,
            time: Duration::from_secs_f64(secs),
            steps,
        }
    }

    #[test]
    fn test_empty_tree() {
        let tree = ProofTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 0);
        assert_eq!(tree.entity_count(), 0);
        assert_eq!(tree.entities().count(), 0);
    }

    #[test]
    fn test_build_and_traverse() {
        let mut tree = ProofTree::new();
        let e = tree.add_entity("Stacks.Push");
        let i1 = tree.add_item(e, "stacks.adb", 42, 7, "VC_OVERFLOW_CHECK");
        let i2 = tree.add_item(e, "stacks.ads", 12, 4, "VC_PRECONDITION");
        tree.add_attempt(i1, attempt("CVC4", Outcome::Valid, 0.5, 100));
        tree.add_attempt(i1, attempt("Z3", Outcome::Timeout, 5.0, 0));
        tree.add_attempt(i2, attempt("Trivial", Outcome::Valid, 0.0, 0));

        assert_eq!(tree.entity_count(), 1);
        assert_eq!(tree.node_count(), 6);

        let entity = tree.entities().next().unwrap();
        assert_eq!(entity.name, "Stacks.Push");

        let items: Vec<_> = tree.items(entity).collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].file, "stacks.adb");
        assert_eq!(items[0].line, 42);
        assert_eq!(items[1].rule, "VC_PRECONDITION");

        let attempts: Vec<_> = tree.attempts(items[0]).collect();
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].prover, "CVC4");
        assert!(attempts[0].outcome.is_valid());
        assert_eq!(attempts[1].prover, "Z3");
        assert!(!attempts[1].outcome.is_valid());
    }

    #[test]
    fn test_attempt_order_preserved() {
        let mut tree = ProofTree::new();
        let e = tree.add_entity("P");
        let i = tree.add_item(e, "p.ads", 1, 1, "VC_RANGE_CHECK");
        for n in 0..5 {
            tree.add_attempt(i, attempt(&format!("prover_{n}"), Outcome::Unknown, 0.1, n));
        }
        let entity = tree.entities().next().unwrap();
        let item = tree.items(entity).next().unwrap();
        let provers: Vec<_> = tree.attempts(item).map(|a| a.prover.as_str()).collect();
        assert_eq!(
            provers,
            vec!["prover_0", "prover_1", "prover_2", "prover_3", "prover_4"]
        );
    }

    #[test]
    fn test_multiple_entities() {
        let mut tree = ProofTree::new();
        tree.add_entity("A");
        tree.add_entity("B");
        tree.add_entity("C");
        let names: Vec<_> = tree.entities().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    #[should_panic(expected = "is not an entity")]
    fn test_item_under_non_entity_panics() {
        let mut tree = ProofTree::new();
        let e = tree.add_entity("A");
        let i = tree.add_item(e, "a.ads", 1, 1, "VC_ASSERT");
        tree.add_item(i, "a.adb", 2, 2, "VC_ASSERT");
    }

    #[test]
    #[should_panic(expected = "is not a proof item")]
    fn test_attempt_under_non_item_panics() {
        let mut tree = ProofTree::new();
        let e = tree.add_entity("A");
        tree.add_attempt(e, attempt("Z3", Outcome::Valid, 0.1, 1));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Valid.to_string(), "Valid");
        assert_eq!(Outcome::Invalid.to_string(), "Invalid");
        assert_eq!(Outcome::Timeout.to_string(), "Timeout");
        assert_eq!(Outcome::Unknown.to_string(), "Unknown");
        assert_eq!(Outcome::Other.to_string(), "Other");
    }

    #[test]
    fn test_outcome_from_str_lossy() {
        assert_eq!(Outcome::from_str_lossy("Valid"), Outcome::Valid);
        assert_eq!(Outcome::from_str_lossy("Invalid"), Outcome::Invalid);
        assert_eq!(Outcome::from_str_lossy("Timeout"), Outcome::Timeout);
        assert_eq!(Outcome::from_str_lossy("Unknown"), Outcome::Unknown);
        assert_eq!(Outcome::from_str_lossy("HighFailure"), Outcome::Other);
        assert_eq!(Outcome::from_str_lossy(""), Outcome::Other);
    }

    #[test]
    fn test_outcome_deserialize_unrecognized() {
        let outcome: Outcome = serde_json::from_str("\"Valid\"").unwrap();
        assert_eq!(outcome, Outcome::Valid);
        let outcome: Outcome = serde_json::from_str("\"HighFailure\"").unwrap();
        assert_eq!(outcome, Outcome::Other);
    }
}
