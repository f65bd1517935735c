/// Errors that can occur while computing isotope variants
#[derive(Debug, thiserror::Error)]
pub enum IsotopeError {
    /// Formula could not be parsed into an elemental composition
    #[error("Invalid formula '{formula}': {reason}")]
    InvalidFormula {
        /// The full formula
        formula: String,
        /// Parser message
        reason: String,
    },

    /// A label element occurs too often to enumerate its isotopologues
    #[error("Formula '{formula}' has {count} {element} atoms, too many to label")]
    TooManyAtoms {
        /// Label element symbol
        element: String,
        /// Atom count in the formula
        count: u32,
        /// The full formula
        formula: String,
    },
}
