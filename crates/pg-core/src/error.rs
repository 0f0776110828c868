/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised when parsing core values from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The text does not name one of the six abilities.
    #[error("unknown ability: \"{0}\"")]
    UnknownAbility(String),

    /// The text does not name a class type.
    #[error("unknown class type: \"{0}\"")]
    UnknownClassType(String),

    /// The text does not name a gender.
    #[error("unknown gender: \"{0}\"")]
    UnknownGender(String),

    /// The text does not name a meaning category.
    #[error("unknown meaning category: \"{0}\"")]
    UnknownCategory(String),
}
