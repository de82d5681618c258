//! Filters and orders aggregated times into the recommendation listing.

use std::cmp::Ordering;

use serde::Serialize;

use crate::timings::{FileTimes, ProverTimes, TimingMap};

/// Pseudo-prover marking obligations discharged without real proving
/// effort. Never ranked.
pub const TRIVIAL_PROVER: &str = "Trivial";

/// One prover's entry in a file's recommendation list.
#[derive(Debug, Clone, Serialize)]
pub struct ProverRanking {
    /// Prover identity.
    pub prover: String,
    /// Accumulated times backing the rank.
    #[serde(flatten)]
    pub times: ProverTimes,
}

/// Recommendation entry for one source file.
#[derive(Debug, Clone, Serialize)]
pub struct FileRanking {
    /// Canonical source file name.
    pub name: String,
    /// Provers to try, best first.
    pub provers: Vec<ProverRanking>,
}

/// Order provers: less wasted (failed) time first; on equal failed time
/// the larger accumulated success time wins, a proxy for "most exercised,
/// try this one first". Strict weak ordering, nothing more is guaranteed.
pub fn rank_better(a: &ProverTimes, b: &ProverTimes) -> Ordering {
    a.failed.cmp(&b.failed).then(b.success.cmp(&a.success))
}

/// Build the final per-file prover recommendations.
///
/// Drops the `Trivial` pseudo-prover everywhere, then any file left with
/// no provers at all, sorts provers per file with [`rank_better`] and the
/// files by canonical name.
///
/// The ranking reflects only provers that actually ran: a prover skipped
/// because an earlier one already discharged the obligation is invisible
/// here, as are cross-file joint orderings. Accepted imprecision, not a
/// defect to correct.
pub fn rank(timings: TimingMap) -> Vec<FileRanking> {
    let mut files = Vec::new();
    for file in timings.into_values() {
        let FileTimes { name, provers } = file;
        let mut ranked: Vec<ProverRanking> = provers
            .into_iter()
            .filter(|(prover, _)| prover != TRIVIAL_PROVER)
            .map(|(prover, times)| ProverRanking { prover, times })
            .collect();
        if ranked.is_empty() {
            continue;
        }
        ranked.sort_by(|a, b| rank_better(&a.times, &b.times));
        files.push(FileRanking {
            name,
            provers: ranked,
        });
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));
    files
}
