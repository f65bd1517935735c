use chemical_elements::{ChemicalComposition, PROTON as _PROTON};

use super::{Isotope, IsotopeCalculator, IsotopeError, LabelingFamily};

/// The mass of H+, a hydrogen atom minus an electron
pub const PROTON: f64 = _PROTON;

const C13_SHIFT: f64 = 1.003_354_837_8;
const N15_SHIFT: f64 = 0.997_034_894_0;
const S34_SHIFT: f64 = 1.995_795_9;
const D2_SHIFT: f64 = 1.006_276_746_0;

/// Largest atom count of a label element that is expanded into isotopologues
pub const MAX_LABELED_ATOMS: u32 = 1000;

/// Name of the unlabeled parent variant
pub const PARENT_NAME: &str = "C12 PARENT";

/// Parse a molecular formula such as `C6H12O6` into its elemental composition
pub fn parse_formula(formula: &str) -> Result<ChemicalComposition<'static>, IsotopeError> {
    formula
        .trim()
        .parse::<ChemicalComposition<'static>>()
        .map_err(|e| IsotopeError::InvalidFormula {
            formula: formula.to_string(),
            reason: format!("{:?}", e),
        })
}

/// Number of atoms of `element` in `composition`, bounded by [`MAX_LABELED_ATOMS`]
fn label_count(
    composition: &ChemicalComposition<'_>,
    element: &str,
    formula: &str,
) -> Result<u32, IsotopeError> {
    let count = u32::try_from(composition[element]).unwrap_or(0);
    if count > MAX_LABELED_ATOMS {
        return Err(IsotopeError::TooManyAtoms {
            element: element.to_string(),
            count,
            formula: formula.to_string(),
        });
    }
    Ok(count)
}

/// Isotope calculator producing single-label isotopologues from a formula.
///
/// The list starts with the unlabeled parent, followed by every
/// `C13-label-k`, `N15-label-k`, `S34-label-k` and `D2-label-k` variant
/// (k = 1 up to the number of C, N, S and H atoms respectively).
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelingIsotopeCalculator;

impl LabelingIsotopeCalculator {
    /// Create a new calculator
    pub fn new() -> Self {
        Self
    }
}

impl IsotopeCalculator for LabelingIsotopeCalculator {
    fn compute_isotopes(&self, formula: &str, ionization_mode: i32) -> Result<Vec<Isotope>, IsotopeError> {
        let composition = parse_formula(formula)?;
        let neutral_mass = composition.mass();
        let to_mz = |mass: f64| mass + f64::from(ionization_mode) * PROTON;

        let mut isotopes = vec![Isotope::new(PARENT_NAME, to_mz(neutral_mass))];

        let labels = [
            (LabelingFamily::C13, "C", C13_SHIFT),
            (LabelingFamily::N15, "N", N15_SHIFT),
            (LabelingFamily::S34, "S", S34_SHIFT),
            (LabelingFamily::D2, "H", D2_SHIFT),
        ];
        for (family, element, shift) in labels {
            for k in 1..=label_count(&composition, element, formula)? {
                isotopes.push(Isotope::new(
                    format!("{}-{}", family.marker(), k),
                    to_mz(neutral_mass + f64::from(k) * shift),
                ));
            }
        }

        log::debug!("Computed {} isotopes for {}", isotopes.len(), formula);
        Ok(isotopes)
    }
}
