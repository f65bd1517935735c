use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use peakreport::model::QuantType;

mod config;
mod export;
mod isotopes;

/// peakreport - Peak Group Report Writer
#[derive(Parser)]
#[command(name = "peakreport")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Peak measure for the per-sample columns of the group report.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum QuantTypeArg {
    /// Area of the top of the peak
    AreaTop,
    /// Baseline corrected area
    Area,
    /// Apex intensity
    Height,
    /// Raw integrated area
    AreaNotCorrected,
    /// Apex retention time
    RetentionTime,
    /// Peak quality score
    Quality,
    /// Signal to baseline ratio
    SnRatio,
}

impl From<QuantTypeArg> for QuantType {
    fn from(arg: QuantTypeArg) -> Self {
        match arg {
            QuantTypeArg::AreaTop => QuantType::AreaTop,
            QuantTypeArg::Area => QuantType::Area,
            QuantTypeArg::Height => QuantType::Height,
            QuantTypeArg::AreaNotCorrected => QuantType::AreaNotCorrected,
            QuantTypeArg::RetentionTime => QuantType::RetentionTime,
            QuantTypeArg::Quality => QuantType::Quality,
            QuantTypeArg::SnRatio => QuantType::SnRatio,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write group and peak reports for a JSON result set
    Export {
        /// Result set with "samples" and "groups"
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Group report path (.csv for comma separated, tab otherwise)
        #[arg(short = 'g', long, value_name = "FILE")]
        groups: Option<PathBuf>,

        /// Peak report path (.csv for comma separated, tab otherwise)
        #[arg(short = 'p', long, value_name = "FILE")]
        peaks: Option<PathBuf>,

        /// Peak measure for per-sample columns (default: area-top)
        #[arg(short = 'q', long, value_enum)]
        quant_type: Option<QuantTypeArg>,

        /// Add a header line with each sample's set name
        #[arg(long)]
        set_names: bool,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// List the isotope variants of a molecular formula
    Isotopes {
        /// Molecular formula, e.g. C6H12O6
        #[arg(value_name = "FORMULA")]
        formula: String,

        /// Compute m/z for negative ion mode
        #[arg(long)]
        negative: bool,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Export {
            input,
            groups,
            peaks,
            quant_type,
            set_names,
            config,
        } => export::run(
            input,
            groups,
            peaks,
            quant_type.map(QuantType::from),
            set_names,
            config,
        ),
        Commands::Isotopes { formula, negative } => isotopes::run(&formula, negative),
    }
}
