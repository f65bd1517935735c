//! # Report Module
//!
//! Writes peak grouping results as two delimited text reports:
//!
//! - **Group report**: one row per emitted peak group, with fixed summary
//!   columns followed by one quantity column per sample.
//! - **Peak report**: one row per raw peak, keyed to the group report by the
//!   sequential `groupId`.
//!
//! ## Dialect
//!
//! Each report is tab separated unless its file name ends in `.csv`. Text
//! fields are sanitized for the chosen delimiter; numbers are written as is.
//!
//! ## Isotope Policy
//!
//! A group without a compound (or without children) is written as a single
//! row. Otherwise its first child is written as the unlabeled form, followed
//! by at most one child per labeling experiment enabled on the first sample
//! (see [`crate::isotopes::select_isotope_children`]). Each written child is
//! followed by its own subtree in pre-order.

pub mod columns;
mod config;
mod dialect;
mod error;
mod stats;
mod traversal;
mod writer_impl;


pub use config::ReportConfig;
pub use dialect::Dialect;
pub use error::ReportError;
pub use stats::ReportStats;
pub use traversal::walk_preorder;
pub use writer_impl::{ppm_distance, ReportWriter};
