//! # peakreport
//!
//! Command-line front end for writing peak group reports.
//!
//! ## Usage
//!
//! ```bash
//! # Write group and peak reports for a JSON result set
//! peakreport export results.json --groups groups.csv --peaks peaks.csv
//!
//! # List the isotopologues considered for a formula
//! peakreport isotopes C6H12O6
//! ```

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
