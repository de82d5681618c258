//! Loads JSON report files emitted by the verification tool into a [`ProofTree`].
//!
//! One report file covers one analyzed compilation unit. The loader owns all
//! structural validation; downstream analysis trusts the tree it produces.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::tree::{Outcome, ProofAttempt, ProofTree};

/// Report format version this loader understands.
pub const REPORT_FORMAT_VERSION: u32 = 1;

/// Error type for report loading and discovery.
#[derive(Debug, Error)]
pub enum ReportError {
    /// IO error while reading a report file.
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Malformed JSON in a report file.
    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Structurally valid JSON that violates the report contract.
    #[error("invalid report {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
    /// Directory walk error during report discovery.
    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Result type for loader and discovery operations.
pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Debug, Deserialize)]
struct RawReport {
    #[serde(default)]
    format: Option<u32>,
    entities: Vec<RawEntity>,
}

#[derive(Debug, Deserialize)]
struct RawEntity {
    name: String,
    #[serde(default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    file: String,
    #[serde(default)]
    line: u32,
    #[serde(default)]
    column: u32,
    #[serde(default)]
    rule: String,
    #[serde(default)]
    attempts: Vec<RawAttempt>,
}

#[derive(Debug, Deserialize)]
struct RawAttempt {
    prover: String,
    result: Outcome,
    time: f64,
    steps: u64,
}

/// Parse one report file and append its entities to `tree`.
pub fn load_into(tree: &mut ProofTree, path: &Path) -> ReportResult<()> {
    let contents = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: RawReport = serde_json::from_str(&contents).map_err(|source| ReportError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(format) = raw.format {
        if format != REPORT_FORMAT_VERSION {
            return Err(ReportError::Invalid {
                path: path.to_path_buf(),
                reason: format!(
                    "unsupported format version {format} (expected {REPORT_FORMAT_VERSION})"
                ),
            });
        }
    }

    let entity_count = raw.entities.len();
    for entity in raw.entities {
        let entity_id = tree.add_entity(entity.name);
        for item in entity.items {
            let item_id = tree.add_item(entity_id, item.file, item.line, item.column, item.rule);
            for attempt in item.attempts {
                if !attempt.time.is_finite() || attempt.time < 0.0 {
                    return Err(ReportError::Invalid {
                        path: path.to_path_buf(),
                        reason: format!(
                            "attempt of prover {:?} has invalid time {}",
                            attempt.prover, attempt.time
                        ),
                    });
                }
                tree.add_attempt(
                    item_id,
                    ProofAttempt {
                        prover: attempt.prover,
                        outcome: attempt.result,
                        time: Duration::from_secs_f64(attempt.time),
                        steps: attempt.steps,
                    },
                );
            }
        }
    }

    tracing::debug!(
        entities = entity_count,
        path = %path.display(),
        "Loaded report file"
    );

    Ok(())
}

/// Load a single report file into a fresh tree.
pub fn load_report(path: &Path) -> ReportResult<ProofTree> {
    let mut tree = ProofTree::new();
    load_into(&mut tree, path)?;
    Ok(tree)
}

/// Merge several report files into one tree, in the given order.
pub fn load_tree(paths: &[PathBuf]) -> ReportResult<ProofTree> {
    let mut tree = ProofTree::new();
    for path in paths {
        load_into(&mut tree, path)?;
    }
    tracing::info!(
        files = paths.len(),
        entities = tree.entity_count(),
        nodes = tree.node_count(),
        "Loaded proof tree"
    );
    Ok(tree)
}
