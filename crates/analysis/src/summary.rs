//! Whole-tree roll-ups: report totals and per-entity proof times.

use std::collections::BTreeSet;
use std::time::Duration;

use serde::Serialize;

use report::{Outcome, ProofTree};

use crate::timings::duration_secs;

/// Totals across one loaded proof tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    /// Number of entities.
    pub entities: usize,
    /// Number of proof items.
    pub items: usize,
    /// Number of prover attempts.
    pub attempts: usize,
    /// Items with at least one `Valid` attempt.
    pub proved_items: usize,
    /// Attempts per outcome. `unknown_attempts` also covers outcomes this
    /// tool does not recognize.
    pub valid_attempts: usize,
    pub invalid_attempts: usize,
    pub timeout_attempts: usize,
    pub unknown_attempts: usize,
    /// Distinct prover identities seen.
    pub provers: usize,
    /// Total time across `Valid` attempts.
    #[serde(serialize_with = "duration_secs")]
    pub success_time: Duration,
    /// Total time across all other attempts.
    #[serde(serialize_with = "duration_secs")]
    pub failed_time: Duration,
}

impl ReportSummary {
    /// Items without a single `Valid` attempt.
    pub fn unproved_items(&self) -> usize {
        self.items - self.proved_items
    }
}

/// Compute totals over the whole tree in one pass.
pub fn summarize(tree: &ProofTree) -> ReportSummary {
    let mut summary = ReportSummary::default();
    let mut provers = BTreeSet::new();

    for entity in tree.entities() {
        summary.entities += 1;
        for item in tree.items(entity) {
            summary.items += 1;
            let mut proved = false;
            for attempt in tree.attempts(item) {
                summary.attempts += 1;
                provers.insert(attempt.prover.clone());
                match attempt.outcome {
                    Outcome::Valid => {
                        summary.valid_attempts += 1;
                        summary.success_time += attempt.time;
                        proved = true;
                    }
                    Outcome::Invalid => {
                        summary.invalid_attempts += 1;
                        summary.failed_time += attempt.time;
                    }
                    Outcome::Timeout => {
                        summary.timeout_attempts += 1;
                        summary.failed_time += attempt.time;
                    }
                    Outcome::Unknown | Outcome::Other => {
                        summary.unknown_attempts += 1;
                        summary.failed_time += attempt.time;
                    }
                }
            }
            if proved {
                summary.proved_items += 1;
            }
        }
    }

    summary.provers = provers.len();
    summary
}

/// Proof-time roll-up for one entity.
#[derive(Debug, Clone, Serialize)]
pub struct EntityTimes {
    /// Fully-qualified entity name.
    pub name: String,
    /// Number of proof items under the entity.
    pub items: usize,
    /// Items with at least one `Valid` attempt.
    pub proved_items: usize,
    /// Sum of all attempt times under the entity.
    #[serde(serialize_with = "duration_secs")]
    pub total_time: Duration,
    /// Longest single attempt under the entity.
    #[serde(serialize_with = "duration_secs")]
    pub max_time: Duration,
}

/// Per-entity proof times, slowest first (name ascending on ties).
pub fn entity_times(tree: &ProofTree) -> Vec<EntityTimes> {
    let mut out: Vec<EntityTimes> = tree
        .entities()
        .map(|entity| {
            let mut times = EntityTimes {
                name: entity.name.clone(),
                items: 0,
                proved_items: 0,
                total_time: Duration::ZERO,
                max_time: Duration::ZERO,
            };
            for item in tree.items(entity) {
                times.items += 1;
                let mut proved = false;
                for attempt in tree.attempts(item) {
                    times.total_time += attempt.time;
                    times.max_time = times.max_time.max(attempt.time);
                    proved = proved || attempt.outcome.is_valid();
                }
                if proved {
                    times.proved_items += 1;
                }
            }
            times
        })
        .collect();

    out.sort_by(|a, b| b.total_time.cmp(&a.total_time).then(a.name.cmp(&b.name)));
    out
}
