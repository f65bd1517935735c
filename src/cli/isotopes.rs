use anyhow::{Context, Result};

use peakreport::isotopes::{IsotopeCalculator, LabelingIsotopeCalculator};

/// Print the isotope variants of a formula
pub fn run(formula: &str, negative: bool) -> Result<()> {
    let ionization_mode = if negative { -1 } else { 1 };
    let isotopes = LabelingIsotopeCalculator::new()
        .compute_isotopes(formula, ionization_mode)
        .with_context(|| format!("Failed to compute isotopes of {}", formula))?;

    println!("Isotopes of {} ({} mode)", formula, if negative { "negative" } else { "positive" });
    for isotope in &isotopes {
        println!("  {:<16} {:.5}", isotope.name, isotope.mass);
    }

    Ok(())
}
