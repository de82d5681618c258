mod config;
mod pipeline;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pipeline::{EntitiesArgs, RankArgs, SummaryArgs};
use render::Format;

/// proofstat: per-file prover timing analysis for verification reports.
#[derive(Parser)]
#[command(name = "proofstat", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// CLI subcommands for prover ranking and report roll-ups.
#[derive(Subcommand)]
enum Command {
    /// Rank provers per source file: least wasted time first.
    Rank {
        /// Directory searched recursively for report files.
        #[arg(long)]
        report_dir: PathBuf,
        /// Path to analysis config TOML file.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Report file extension override (no leading dot).
        #[arg(long)]
        extension: Option<String>,
        /// Listing format.
        #[arg(long, value_enum)]
        format: Option<Format>,
        /// Write the listing here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print whole-report totals.
    Summary {
        /// Directory searched recursively for report files.
        #[arg(long)]
        report_dir: PathBuf,
        /// Path to analysis config TOML file.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Report file extension override (no leading dot).
        #[arg(long)]
        extension: Option<String>,
        /// Output as JSON instead of human-readable text.
        #[arg(long)]
        json: bool,
    },
    /// List entities by accumulated proof time, slowest first.
    Entities {
        /// Directory searched recursively for report files.
        #[arg(long)]
        report_dir: PathBuf,
        /// Path to analysis config TOML file.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Report file extension override (no leading dot).
        #[arg(long)]
        extension: Option<String>,
        /// Keep only the slowest N entities.
        #[arg(long)]
        limit: Option<usize>,
        /// Output as JSON instead of human-readable text.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Rank {
            report_dir,
            config,
            extension,
            format,
            output,
        } => pipeline::run_rank(RankArgs {
            report_dir,
            config,
            extension,
            format,
            output,
        }),
        Command::Summary {
            report_dir,
            config,
            extension,
            json,
        } => pipeline::run_summary(SummaryArgs {
            report_dir,
            config,
            extension,
            json,
        }),
        Command::Entities {
            report_dir,
            config,
            extension,
            limit,
            json,
        } => pipeline::run_entities(EntitiesArgs {
            report_dir,
            config,
            extension,
            limit,
            json,
        }),
    }
}
