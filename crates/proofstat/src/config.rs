//! TOML config loading for the proofstat CLI.
//!
//! Deserializes an optional `configs/analysis.toml` with `[discovery]` and
//! `[output]` sections, then merges with CLI overrides.

use std::path::Path;

use serde::Deserialize;

use crate::render::Format;

/// Config path probed when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "configs/analysis.toml";

/// Top-level structure matching `configs/analysis.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct AnalysisToml {
    /// Report discovery overrides.
    #[serde(default)]
    pub discovery: DiscoveryOverrides,
    /// Output overrides.
    #[serde(default)]
    pub output: OutputOverrides,
}

/// Optional `[discovery]` section.
#[derive(Debug, Default, Deserialize)]
pub struct DiscoveryOverrides {
    /// Report file extension, no leading dot.
    pub extension: Option<String>,
}

/// Optional `[output]` section.
#[derive(Debug, Default, Deserialize)]
pub struct OutputOverrides {
    /// Listing format: `"text"`, `"json"`, or `"csv"`.
    pub format: Option<Format>,
}

/// Load a config file. `required` distinguishes an explicit `--config`
/// (missing file is an error) from probing the default path (missing file
/// means built-in defaults).
pub fn load_analysis_toml(path: &Path, required: bool) -> anyhow::Result<AnalysisToml> {
    if !path.exists() {
        if required {
            anyhow::bail!("config file {} not found", path.display());
        }
        return Ok(AnalysisToml::default());
    }
    let contents = std::fs::read_to_string(path)?;
    let config: AnalysisToml = toml::from_str(&contents)?;
    tracing::info!(path = %path.display(), "Loaded analysis config");
    Ok(config)
}

/// Priority chain: built-in default < TOML value < CLI flag.
pub fn effective_extension(toml: &AnalysisToml, cli: Option<&str>) -> String {
    cli.map(str::to_string)
        .or_else(|| toml.discovery.extension.clone())
        .unwrap_or_else(|| report::DEFAULT_EXTENSION.to_string())
}

/// Priority chain: built-in default < TOML value < CLI flag.
pub fn effective_format(toml: &AnalysisToml, cli: Option<Format>) -> Format {
    cli.or(toml.output.format).unwrap_or_default()
}
