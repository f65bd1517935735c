//! # Isotope Module
//!
//! Labeled isotopologue descriptors and the policy that decides which isotope
//! children of a peak group are written to the group report.
//!
//! The mass computation itself sits behind the [`IsotopeCalculator`] trait so
//! the report writer can be driven by any isotope engine. A formula based
//! implementation is provided in [`LabelingIsotopeCalculator`].

mod error;
mod formula;
mod selection;

#[cfg(test)]
mod tests;

pub use error::IsotopeError;
pub use formula::{parse_formula, LabelingIsotopeCalculator, MAX_LABELED_ATOMS, PARENT_NAME, PROTON};
pub use selection::{ionization_mode, select_isotope_children};

use serde::{Deserialize, Serialize};

use crate::model::Sample;

/// A labeled (or unlabeled parent) variant of a compound
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Isotope {
    /// Variant name, e.g. "C13-label-2"; matched against child group tags
    pub name: String,

    /// Theoretical m/z at the requested ionization mode
    pub mass: f64,
}

impl Isotope {
    /// Create a new isotope descriptor
    pub fn new(name: impl Into<String>, mass: f64) -> Self {
        Self {
            name: name.into(),
            mass,
        }
    }
}

/// Source of isotope variants for a molecular formula
pub trait IsotopeCalculator {
    /// All isotope variants of `formula` at the given ionization mode (+1 or -1)
    fn compute_isotopes(&self, formula: &str, ionization_mode: i32) -> Result<Vec<Isotope>, IsotopeError>;
}

/// Isotope tracing experiment families recognized in isotope names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelingFamily {
    /// Heavy carbon
    C13,
    /// Heavy nitrogen
    N15,
    /// Heavy sulfur
    S34,
    /// Deuterium
    D2,
}

impl LabelingFamily {
    /// Every supported family
    pub const ALL: [LabelingFamily; 4] = [
        LabelingFamily::C13,
        LabelingFamily::N15,
        LabelingFamily::S34,
        LabelingFamily::D2,
    ];

    /// Substring identifying this family in an isotope name
    pub fn marker(&self) -> &'static str {
        match self {
            LabelingFamily::C13 => "C13-label",
            LabelingFamily::N15 => "N15-label",
            LabelingFamily::S34 => "S34-label",
            LabelingFamily::D2 => "D2-label",
        }
    }

    /// Whether an isotope name belongs to this family
    pub fn matches(&self, isotope_name: &str) -> bool {
        isotope_name.contains(self.marker())
    }

    /// Whether the sample was acquired with this labeling experiment
    pub fn enabled_for(&self, sample: &Sample) -> bool {
        match self {
            LabelingFamily::C13 => sample.c13_labeled,
            LabelingFamily::N15 => sample.n15_labeled,
            LabelingFamily::S34 => sample.s34_labeled,
            LabelingFamily::D2 => sample.d2_labeled,
        }
    }
}
