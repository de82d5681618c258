//! Proof report model: arena tree, JSON report loader, and report discovery.
//!
//! One report file per analyzed compilation unit, parsed into a single
//! [`ProofTree`] that the analysis crate traverses read-only.
//!
//! # Key types
//!
//! - [`ProofTree`] — arena of entities, proof items, and prover attempts
//! - [`Outcome`] — per-attempt prover verdict (`Valid` or some failure)
//! - [`load_tree`] / [`load_report`] — JSON report files → tree
//! - [`find_report_files`] — recursive, extension-filtered discovery

pub mod discovery;
pub mod loader;
pub mod tree;

pub use discovery::{find_report_files, DEFAULT_EXTENSION};
pub use loader::{load_into, load_report, load_tree, ReportError, ReportResult};
pub use tree::{Entity, Node, NodeId, Outcome, ProofAttempt, ProofItem, ProofTree};
