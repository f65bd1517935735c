//! TOML configuration file support.
//!
//! Settings that would otherwise be repeated on every run can live in a file:
//!
//! ```toml
//! # peakreport.toml
//! [report]
//! quant_type = "height"
//! include_set_names = true
//! group_report = "groups.csv"
//! peak_report = "peaks.tsv"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use peakreport::model::QuantType;

/// Root configuration structure for peakreport.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Report-specific settings.
    #[serde(default)]
    pub report: ReportSection,
}

/// Configuration for the export command.
#[derive(Debug, Default, Deserialize)]
pub struct ReportSection {
    /// Peak measure for per-sample columns.
    pub quant_type: Option<QuantType>,

    /// Add the set-name header line to the group report.
    pub include_set_names: Option<bool>,

    /// Group report output path.
    pub group_report: Option<PathBuf>,

    /// Peak report output path.
    pub peak_report: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
