use crate::model::{PeakGroup, Sample};

use super::{Isotope, LabelingFamily};

/// Ionization mode of a run: +1 when the first sample is positive mode, else -1
pub fn ionization_mode(samples: &[Sample]) -> i32 {
    match samples.first() {
        Some(sample) if sample.is_positive() => 1,
        _ => -1,
    }
}

/// Pick the isotope children of `group` that belong in the group report.
///
/// Isotopes are visited in the order the calculator returned them. An isotope
/// is considered only if its name carries a labeling family that is enabled on
/// `labeling` and has not already produced a row. The first child whose tag
/// equals the isotope name is selected; the remaining children are not
/// scanned. Families without a matching child produce nothing.
///
/// Returns indices into `group.children`, in emission order.
pub fn select_isotope_children(
    group: &PeakGroup,
    isotopes: &[Isotope],
    labeling: &Sample,
) -> Vec<usize> {
    let mut satisfied: Vec<LabelingFamily> = Vec::new();
    let mut selected = Vec::new();

    for isotope in isotopes {
        let families: Vec<LabelingFamily> = LabelingFamily::ALL
            .into_iter()
            .filter(|family| {
                family.matches(&isotope.name)
                    && family.enabled_for(labeling)
                    && !satisfied.contains(family)
            })
            .collect();

        if families.is_empty() {
            continue;
        }

        if let Some(index) = group
            .children
            .iter()
            .position(|child| child.tag_string == isotope.name)
        {
            selected.push(index);
            satisfied.extend(families);
        }
    }

    selected
}
