//! Discover → load → analyze → render pipeline behind the CLI subcommands.

use std::path::{Path, PathBuf};
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

use analysis::{collect_timings, entity_times, rank, summarize};
use report::{find_report_files, load_into, ProofTree};

use crate::config::{
    effective_extension, effective_format, load_analysis_toml, AnalysisToml, DEFAULT_CONFIG_PATH,
};
use crate::render::{self, Format};

/// Arguments for the `rank` subcommand.
#[derive(Debug)]
pub struct RankArgs {
    /// Directory searched recursively for report files.
    pub report_dir: PathBuf,
    /// Explicit config file, if any.
    pub config: Option<PathBuf>,
    /// CLI override for the report extension.
    pub extension: Option<String>,
    /// CLI override for the listing format.
    pub format: Option<Format>,
    /// Write the listing here instead of stdout.
    pub output: Option<PathBuf>,
}

/// Arguments for the `summary` subcommand.
#[derive(Debug)]
pub struct SummaryArgs {
    /// Directory searched recursively for report files.
    pub report_dir: PathBuf,
    /// Explicit config file, if any.
    pub config: Option<PathBuf>,
    /// CLI override for the report extension.
    pub extension: Option<String>,
    /// Output as JSON instead of human-readable text.
    pub json: bool,
}

/// Arguments for the `entities` subcommand.
#[derive(Debug)]
pub struct EntitiesArgs {
    /// Directory searched recursively for report files.
    pub report_dir: PathBuf,
    /// Explicit config file, if any.
    pub config: Option<PathBuf>,
    /// CLI override for the report extension.
    pub extension: Option<String>,
    /// Keep only the slowest `limit` entities.
    pub limit: Option<usize>,
    /// Output as JSON instead of human-readable text.
    pub json: bool,
}

fn resolve_config(config: Option<&Path>) -> anyhow::Result<AnalysisToml> {
    match config {
        Some(path) => load_analysis_toml(path, true),
        None => load_analysis_toml(Path::new(DEFAULT_CONFIG_PATH), false),
    }
}

/// Discover and load all report files under `report_dir` into one tree.
fn load_reports(report_dir: &Path, extension: &str) -> anyhow::Result<ProofTree> {
    let paths = find_report_files(report_dir, extension)?;
    if paths.is_empty() {
        anyhow::bail!(
            "no .{extension} report files under {}",
            report_dir.display()
        );
    }

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("valid progress bar template")
            .progress_chars("=> "),
    );

    let mut tree = ProofTree::new();
    for path in &paths {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            pb.set_message(name.to_string());
        }
        load_into(&mut tree, path)?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    tracing::info!(
        files = paths.len(),
        entities = tree.entity_count(),
        "Loaded reports"
    );
    Ok(tree)
}

/// Rank provers per source file and print or write the listing.
pub fn run_rank(args: RankArgs) -> anyhow::Result<()> {
    let start = Instant::now();
    let toml = resolve_config(args.config.as_deref())?;
    let extension = effective_extension(&toml, args.extension.as_deref());
    let format = effective_format(&toml, args.format);

    let tree = load_reports(&args.report_dir, &extension)?;
    let ranked = rank(collect_timings(&tree));
    let rendered = render::render_ranking(&ranked, format)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            println!("Wrote {} file entries to {}", ranked.len(), path.display());
        }
        None => print!("{rendered}"),
    }

    tracing::info!(
        files = ranked.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Ranking done"
    );
    Ok(())
}

/// Print whole-report totals.
pub fn run_summary(args: SummaryArgs) -> anyhow::Result<()> {
    let toml = resolve_config(args.config.as_deref())?;
    let extension = effective_extension(&toml, args.extension.as_deref());

    let tree = load_reports(&args.report_dir, &extension)?;
    let summary = summarize(&tree);
    print!("{}", render::render_summary(&summary, args.json)?);
    Ok(())
}

/// Print entities by accumulated proof time, slowest first.
pub fn run_entities(args: EntitiesArgs) -> anyhow::Result<()> {
    let toml = resolve_config(args.config.as_deref())?;
    let extension = effective_extension(&toml, args.extension.as_deref());

    let tree = load_reports(&args.report_dir, &extension)?;
    let mut listing = entity_times(&tree);
    if let Some(limit) = args.limit {
        listing.truncate(limit);
    }
    print!("{}", render::render_entities(&listing, args.json)?);
    Ok(())
}
