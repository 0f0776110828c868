//! Error types for loading and validating generator data.

use thiserror::Error;

/// Result type for generator configuration operations.
pub type GenResult<T> = Result<T, GenError>;

/// Errors raised while building, loading or validating tables and decks.
///
/// Generation itself never fails once the tables have been validated.
#[derive(Debug, Error)]
pub enum GenError {
    /// A tables or deck file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A tables or deck file is not valid JSON for its shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A weighted table could not be built.
    #[error("invalid weighted table: {0}")]
    Mech(#[from] pg_mechanics::MechError),

    /// A required table has no entries.
    #[error("table \"{0}\" is empty")]
    EmptyTable(&'static str),

    /// A trait name appears in both the virtue and the vice pool.
    #[error("trait \"{0}\" is both a virtue and a vice")]
    AmbiguousTrait(String),

    /// The primary → secondary/dump mapping is incomplete or not distinct.
    #[error("invalid primary mapping: {0}")]
    InvalidMapping(String),

    /// A culture cannot produce names.
    #[error("invalid culture \"{name}\": {reason}")]
    InvalidCulture {
        /// Culture name.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A vowel-name entry is unusable.
    #[error("invalid vowel names for '{vowel}': {reason}")]
    InvalidVowelNames {
        /// The entry's vowel.
        vowel: char,
        /// What is wrong with it.
        reason: String,
    },

    /// A stat rule set cannot be rolled.
    #[error("invalid {grade} stat rules: {reason}")]
    InvalidStatRules {
        /// Which grade, "baseline" or "player".
        grade: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}
