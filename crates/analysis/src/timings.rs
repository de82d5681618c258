//! Single-pass timing aggregation over the proof tree.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Serialize, Serializer};

use report::ProofTree;

use crate::normalize::normalized_steps;
use crate::source_name::{resolve, unit_key};

/// Serialize a [`Duration`] as fractional seconds.
pub(crate) fn duration_secs<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

/// Accumulated timing statistics for one prover on one source file.
///
/// All fields start at zero and only ever grow within one aggregation
/// pass; no state survives across passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProverTimes {
    /// Total time of `Valid` attempts.
    #[serde(serialize_with = "duration_secs")]
    pub success: Duration,
    /// Total time of all non-`Valid` attempts.
    #[serde(serialize_with = "duration_secs")]
    pub failed: Duration,
    /// Longest single `Valid` attempt.
    #[serde(serialize_with = "duration_secs")]
    pub max_success: Duration,
    /// Largest normalized step count among `Valid` attempts.
    pub max_steps: u64,
}

/// Per-file aggregation result: display name plus per-prover times.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileTimes {
    /// Canonical display name resolved from all spellings seen so far.
    pub name: String,
    /// Accumulated times keyed by prover identity.
    pub provers: BTreeMap<String, ProverTimes>,
}

/// Aggregation output, keyed by logical source unit.
///
/// `BTreeMap` on both levels keeps iteration deterministic, which pins the
/// order of comparator ties downstream: two runs over an unmodified tree
/// render byte-identically.
pub type TimingMap = BTreeMap<String, FileTimes>;

/// Walk the whole tree once, accumulating per-file, per-prover times.
///
/// Accumulators are created zero-initialized on first reference. Every
/// update is a commutative addition or a max, so traversal order cannot
/// change the result; the name-resolver fold is the one documented
/// exception (see [`resolve`]).
pub fn collect_timings(tree: &ProofTree) -> TimingMap {
    let mut map = TimingMap::new();
    for entity in tree.entities() {
        for item in tree.items(entity) {
            let file = map.entry(unit_key(&item.file)).or_default();
            file.name = resolve(&file.name, &item.file);
            for attempt in tree.attempts(item) {
                let times = file.provers.entry(attempt.prover.clone()).or_default();
                if attempt.outcome.is_valid() {
                    times.success += attempt.time;
                    times.max_success = times.max_success.max(attempt.time);
                    times.max_steps = times
                        .max_steps
                        .max(normalized_steps(&attempt.prover, attempt.steps));
                } else {
                    times.failed += attempt.time;
                }
            }
        }
    }
    tracing::debug!(files = map.len(), "Collected timing statistics");
    map
}
