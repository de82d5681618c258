//! Renders analysis output as text, JSON, or CSV.
//!
//! Renderers own no semantics: they consume the ordered artifacts produced
//! by the analysis crate and never reorder or filter them.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use analysis::{EntityTimes, FileRanking, ReportSummary};

/// Output format for listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Aligned human-readable listing.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// One row per (file, prover) pair.
    Csv,
}

fn secs(d: std::time::Duration) -> f64 {
    d.as_secs_f64()
}

/// Render the per-file prover recommendations.
pub fn render_ranking(files: &[FileRanking], format: Format) -> anyhow::Result<String> {
    match format {
        Format::Text => Ok(ranking_text(files)),
        Format::Json => Ok(serde_json::to_string_pretty(files)? + "\n"),
        Format::Csv => Ok(ranking_csv(files)),
    }
}

fn ranking_text(files: &[FileRanking]) -> String {
    let mut out = String::new();
    for file in files {
        let _ = writeln!(out, "{}", file.name);
        for p in &file.provers {
            let _ = writeln!(
                out,
                "  {:<12} success {:>9.3}s  failed {:>9.3}s  max {:>9.3}s  steps {:>8}",
                p.prover,
                secs(p.times.success),
                secs(p.times.failed),
                secs(p.times.max_success),
                p.times.max_steps,
            );
        }
    }
    out
}

fn ranking_csv(files: &[FileRanking]) -> String {
    let mut out = String::from("file,prover,success,failed,max_success,max_steps\n");
    for file in files {
        for p in &file.provers {
            let _ = writeln!(
                out,
                "{},{},{:.3},{:.3},{:.3},{}",
                file.name,
                p.prover,
                secs(p.times.success),
                secs(p.times.failed),
                secs(p.times.max_success),
                p.times.max_steps,
            );
        }
    }
    out
}

/// Render whole-report totals.
pub fn render_summary(summary: &ReportSummary, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(summary)? + "\n");
    }
    let mut out = String::new();
    let _ = writeln!(out, "--- Report Summary ---");
    let _ = writeln!(out, "Entities: {}", summary.entities);
    let _ = writeln!(
        out,
        "Proof items: {} ({} proved, {} unproved)",
        summary.items,
        summary.proved_items,
        summary.unproved_items()
    );
    let _ = writeln!(
        out,
        "Attempts: {} ({} valid, {} invalid, {} timeout, {} unknown)",
        summary.attempts,
        summary.valid_attempts,
        summary.invalid_attempts,
        summary.timeout_attempts,
        summary.unknown_attempts
    );
    let _ = writeln!(out, "Provers: {}", summary.provers);
    let _ = writeln!(out, "Success time: {:.3}s", secs(summary.success_time));
    let _ = writeln!(out, "Failed time: {:.3}s", secs(summary.failed_time));
    Ok(out)
}

/// Render the slowest-entities listing.
pub fn render_entities(entities: &[EntityTimes], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(entities)? + "\n");
    }
    let mut out = String::new();
    let _ = writeln!(out, "--- Slowest Entities ---");
    let width = entities.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for e in entities {
        let _ = writeln!(
            out,
            "{:<width$}  total {:>9.3}s  max {:>9.3}s  items {:>4}  proved {:>4}",
            e.name,
            secs(e.total_time),
            secs(e.max_time),
            e.items,
            e.proved_items,
        );
    }
    Ok(out)
}
