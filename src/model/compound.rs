use serde::{Deserialize, Serialize};

/// A compound matched to a peak group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Compound {
    /// Display name (e.g., "glucose")
    pub name: String,

    /// Database identifier (e.g., "HMDB0000122")
    pub id: String,

    /// Monoisotopic neutral mass
    pub mass: f64,

    /// Molecular formula used to derive labeled isotopologues
    pub formula: String,
}

impl Compound {
    /// Create a new compound
    pub fn new(name: &str, id: &str, mass: f64, formula: &str) -> Self {
        Self {
            name: name.to_string(),
            id: id.to_string(),
            mass,
            formula: formula.to_string(),
        }
    }
}
