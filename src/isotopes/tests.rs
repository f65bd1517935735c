use super::*;
use crate::model::{Compound, PeakGroup};

fn labeled_sample(c13: bool, n15: bool, s34: bool, d2: bool) -> Sample {
    Sample {
        c13_labeled: c13,
        n15_labeled: n15,
        s34_labeled: s34,
        d2_labeled: d2,
        ..Sample::new("s1", 1)
    }
}

fn child(tag: &str) -> PeakGroup {
    PeakGroup {
        tag_string: tag.to_string(),
        ..PeakGroup::new(100.0, 1.0)
    }
}

fn parent_with_children(tags: &[&str]) -> PeakGroup {
    PeakGroup {
        compound: Some(Compound::new("glucose", "HMDB0000122", 180.0634, "C6H12O6")),
        children: tags.iter().map(|t| child(t)).collect(),
        ..PeakGroup::new(181.07, 5.0)
    }
}

fn isotopes(names: &[&str]) -> Vec<Isotope> {
    names.iter().map(|n| Isotope::new(*n, 0.0)).collect()
}

#[test]
fn test_ionization_mode_follows_first_sample() {
    assert_eq!(ionization_mode(&[Sample::new("a", 1), Sample::new("b", -1)]), 1);
    assert_eq!(ionization_mode(&[Sample::new("a", -1), Sample::new("b", 1)]), -1);
    assert_eq!(ionization_mode(&[Sample::new("a", 0)]), -1);
    assert_eq!(ionization_mode(&[]), -1);
}

#[test]
fn test_family_markers() {
    assert!(LabelingFamily::C13.matches("C13-label-3"));
    assert!(!LabelingFamily::C13.matches("C12 PARENT"));
    assert!(LabelingFamily::N15.matches("C13N15-label-1-1"));
    assert!(LabelingFamily::D2.matches("D2-label-1"));
    assert!(LabelingFamily::S34.enabled_for(&labeled_sample(false, false, true, false)));
    assert!(!LabelingFamily::S34.enabled_for(&labeled_sample(true, true, false, true)));
}

#[test]
fn test_no_flags_selects_nothing() {
    let group = parent_with_children(&["C12 PARENT", "C13-label-1", "N15-label-1"]);
    let list = isotopes(&["C12 PARENT", "C13-label-1", "N15-label-1"]);

    let selected = select_isotope_children(&group, &list, &labeled_sample(false, false, false, false));
    assert!(selected.is_empty());
}

#[test]
fn test_enabled_family_selects_matching_child() {
    let group = parent_with_children(&["C12 PARENT", "N15-label-1", "C13-label-1"]);
    let list = isotopes(&["C12 PARENT", "C13-label-1", "N15-label-1"]);

    let selected = select_isotope_children(&group, &list, &labeled_sample(true, false, false, false));
    assert_eq!(selected, vec![2]);

    let selected = select_isotope_children(&group, &list, &labeled_sample(true, true, false, false));
    assert_eq!(selected, vec![2, 1]);
}

#[test]
fn test_first_matching_child_wins() {
    let group = parent_with_children(&["C12 PARENT", "C13-label-1", "C13-label-1"]);
    let list = isotopes(&["C13-label-1"]);

    let selected = select_isotope_children(&group, &list, &labeled_sample(true, false, false, false));
    assert_eq!(selected, vec![1]);
}

#[test]
fn test_at_most_one_row_per_family() {
    let group = parent_with_children(&["C12 PARENT", "C13-label-2", "C13-label-1"]);
    let list = isotopes(&["C12 PARENT", "C13-label-1", "C13-label-2", "C13-label-3"]);

    let selected = select_isotope_children(&group, &list, &labeled_sample(true, false, false, false));
    assert_eq!(selected, vec![2]);
}

#[test]
fn test_unmatched_family_is_retried_with_later_isotopes() {
    let group = parent_with_children(&["C12 PARENT", "C13-label-2"]);
    let list = isotopes(&["C13-label-1", "C13-label-2"]);

    let selected = select_isotope_children(&group, &list, &labeled_sample(true, false, false, false));
    assert_eq!(selected, vec![1]);
}

#[test]
fn test_no_matching_tag_no_placeholder() {
    let group = parent_with_children(&["a", "b", "c"]);
    let list = isotopes(&["C13-label-1", "N15-label-1", "S34-label-1", "D2-label-1"]);

    let selected = select_isotope_children(&group, &list, &labeled_sample(true, true, true, true));
    assert!(selected.is_empty());
}

#[test]
fn test_parse_formula() {
    let composition = parse_formula("C6H12O6").unwrap();
    assert_eq!(composition["C"], 6);
    assert_eq!(composition["H"], 12);
    assert_eq!(composition["O"], 6);
    assert!((composition.mass() - 180.063_388).abs() < 1e-4);

    let composition = parse_formula("CH3CH2OH").unwrap();
    assert_eq!(composition["C"], 2);
    assert_eq!(composition["H"], 6);
}

#[test]
fn test_parse_formula_errors() {
    assert!(matches!(
        parse_formula("C6Xx2"),
        Err(IsotopeError::InvalidFormula { ref formula, .. }) if formula == "C6Xx2"
    ));
}

#[test]
fn test_labeling_calculator_rejects_huge_counts() {
    let calc = LabelingIsotopeCalculator::new();

    assert!(matches!(
        calc.compute_isotopes("C2000H2", 1),
        Err(IsotopeError::TooManyAtoms { ref element, count: 2000, .. }) if element == "C"
    ));
    assert!(calc.compute_isotopes("C4294967295C1", 1).is_err());

    let list = calc.compute_isotopes(&format!("C{}", MAX_LABELED_ATOMS), 1).unwrap();
    assert_eq!(list.len(), MAX_LABELED_ATOMS as usize + 1);
}

#[test]
fn test_labeling_calculator_glucose() {
    let calc = LabelingIsotopeCalculator::new();
    let list = calc.compute_isotopes("C6H12O6", 1).unwrap();

    // parent + 6 C13 + 12 D2
    assert_eq!(list.len(), 19);
    assert_eq!(list[0].name, "C12 PARENT");
    assert!((list[0].mass - (180.063_388 + PROTON)).abs() < 1e-4);
    assert_eq!(list[1].name, "C13-label-1");
    assert_eq!(list[6].name, "C13-label-6");
    assert_eq!(list[7].name, "D2-label-1");
    assert!(list.iter().all(|i| !i.name.contains("N15")));
}

#[test]
fn test_labeling_calculator_negative_mode() {
    let calc = LabelingIsotopeCalculator::new();
    let pos = calc.compute_isotopes("C3H7NO2S", 1).unwrap();
    let neg = calc.compute_isotopes("C3H7NO2S", -1).unwrap();

    assert_eq!(pos.len(), neg.len());
    assert!((pos[0].mass - neg[0].mass - 2.0 * PROTON).abs() < 1e-9);
    assert!(neg.iter().any(|i| i.name == "N15-label-1"));
    assert!(neg.iter().any(|i| i.name == "S34-label-1"));
}
