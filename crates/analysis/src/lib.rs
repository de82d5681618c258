//! Heuristic timing analysis over prover verification reports.
//!
//! Walks a [`report::ProofTree`] once, accumulates per-file, per-prover
//! timing statistics, and ranks the provers to try first for each source
//! file: least wasted (failed) time first, most accumulated success time
//! on ties. Only provers that actually ran are ranked.
//!
//! # Key types
//!
//! - [`collect_timings`] / [`TimingMap`] — the two-level aggregation pass
//! - [`rank`] / [`FileRanking`] — the ordered recommendation artifact
//! - [`normalized_steps`] — prover-specific step rescaling
//! - [`resolve`] / [`unit_key`] — canonical source-name selection
//! - [`summarize`] / [`entity_times`] — whole-tree roll-ups

pub mod normalize;
pub mod rank;
pub mod source_name;
pub mod summary;
pub mod timings;

pub use normalize::normalized_steps;
pub use rank::{rank, rank_better, FileRanking, ProverRanking, TRIVIAL_PROVER};
pub use source_name::{resolve, unit_key};
pub use summary::{entity_times, summarize, EntityTimes, ReportSummary};
pub use timings::{collect_timings, FileTimes, ProverTimes, TimingMap};
