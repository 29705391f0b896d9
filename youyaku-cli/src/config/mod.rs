//! Configuration module

use crate::error::{CliError, CliResult};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Summary configuration
    #[serde(default)]
    pub summary: SummaryConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Summary-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Maximum number of sentences per summary
    pub max_sentences: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self { max_sentences: 3 }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        Ok(config)
    }
}
