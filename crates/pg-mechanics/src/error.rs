//! Error types for the randomness primitives.

/// Errors that can occur while building tables or parsing dice.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MechError {
    /// A weighted table was built with no entries.
    #[error("weighted table is empty")]
    EmptyTable,

    /// A weighted entry carries a weight that is zero, negative, or not finite.
    #[error("invalid weight {weight} at entry {index}")]
    InvalidWeight {
        /// Position of the offending entry.
        index: usize,
        /// The rejected weight.
        weight: f64,
    },

    /// The weights are individually valid but their sum is not finite.
    #[error("weights sum to a non-finite total")]
    NonFiniteTotal,

    /// A dice expression could not be parsed.
    #[error("invalid dice expression: {0}")]
    InvalidDice(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
