//! # peakreport - Peak Group Report Writer
//!
//! `peakreport` writes the results of LC-MS peak grouping as delimited text
//! reports that spreadsheet tools and downstream statistics pipelines can read
//! directly.
//!
//! ## Key Features
//!
//! - **Two Linked Reports**: A group report with one row per peak group and a
//!   quantity column per sample, and a peak report with one row per raw peak,
//!   joined by a sequential `groupId`.
//!
//! - **Dialect by File Name**: `.csv` files are comma separated, everything
//!   else is tab separated. Text fields are quoted only when they contain the
//!   delimiter.
//!
//! - **Isotope Tracing Aware**: For groups matched to a compound, only the
//!   unlabeled form and the isotopologues of the labeling experiments that
//!   were actually run (13C, 15N, 34S, 2H) reach the group report, sharing the
//!   parent's meta group id.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use peakreport::model::{Compound, Peak, PeakGroup, Sample};
//! use peakreport::report::{ReportConfig, ReportWriter};
//!
//! let mut sample = Sample::new("liver_13C_01", 1);
//! sample.c13_labeled = true;
//!
//! let mut reports = ReportWriter::with_config(vec![sample], ReportConfig::default());
//! reports.open_group_report("groups.csv");
//! reports.open_peak_report("peaks.csv");
//!
//! let mut group = PeakGroup::new(181.0707, 5.2);
//! group.compound = Some(Compound::new("glucose", "HMDB0000122", 180.0634, "C6H12O6"));
//! group.peaks.push(Peak::new("liver_13C_01"));
//!
//! reports.add_group(&mut group)?;
//! let stats = reports.close()?;
//! println!("{}", stats);
//! # Ok::<(), peakreport::report::ReportError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`model`]: Samples, peaks, peak groups and compounds
//! - [`isotopes`]: Isotope descriptors, the isotope engine trait and the
//!   isotope child selection policy
//! - [`report`]: Dialects, column schema and the report writer

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod isotopes;
pub mod model;
pub mod report;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::isotopes::{
        ionization_mode, select_isotope_children, Isotope, IsotopeCalculator, IsotopeError,
        LabelingFamily, LabelingIsotopeCalculator,
    };
    pub use crate::model::{Compound, Peak, PeakGroup, QuantType, Sample};
    pub use crate::report::{Dialect, ReportConfig, ReportError, ReportStats, ReportWriter};
}
