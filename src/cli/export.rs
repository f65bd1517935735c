use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use peakreport::model::{PeakGroup, QuantType, Sample};
use peakreport::report::{ReportConfig, ReportWriter};

use super::config::Config;

/// Result set produced by the peak grouping pipeline
#[derive(Debug, Deserialize)]
struct ResultSet {
    samples: Vec<Sample>,
    #[serde(default)]
    groups: Vec<PeakGroup>,
}

impl ResultSet {
    fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open result set: {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse result set: {}", path.display()))
    }
}

/// Default report path next to the input, e.g. `run.json` -> `run.groups.tsv`
fn default_output(input: &Path, kind: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("{}.{}.tsv", stem, kind))
}

/// Write group and peak reports for a JSON result set
pub fn run(
    input: PathBuf,
    groups: Option<PathBuf>,
    peaks: Option<PathBuf>,
    quant_type: Option<QuantType>,
    set_names: bool,
    config: Option<PathBuf>,
) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let file_config = match config {
        Some(path) => Config::from_file(&path)?,
        None => Config::default(),
    };
    let section = file_config.report;

    // Command-line flags win over the config file
    let report_config = ReportConfig::default()
        .with_quant_type(quant_type.or(section.quant_type).unwrap_or_default())
        .with_set_names(set_names || section.include_set_names.unwrap_or(false));
    let group_path = groups
        .or(section.group_report)
        .unwrap_or_else(|| default_output(&input, "groups"));
    let peak_path = peaks
        .or(section.peak_report)
        .unwrap_or_else(|| default_output(&input, "peaks"));

    let mut results = ResultSet::from_json_file(&input)?;

    info!("peakreport - Peak Group Reports");
    info!("===============================");
    info!("Input:        {}", input.display());
    info!("Group report: {}", group_path.display());
    info!("Peak report:  {}", peak_path.display());
    info!("Quantity:     {:?}", report_config.quant_type);
    info!("Samples:      {}", results.samples.len());
    info!("Groups:       {}", results.groups.len());

    let mut writer = ReportWriter::with_config(results.samples, report_config);
    writer.open_group_report(&group_path);
    writer.open_peak_report(&peak_path);

    for group in results.groups.iter_mut() {
        writer
            .add_group(group)
            .context("Failed to write report rows")?;
    }

    let stats = writer.close().context("Failed to finalize reports")?;
    info!("{}", stats);
    println!("{}", stats);

    Ok(())
}
