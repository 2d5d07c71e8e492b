//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Deleting an unknown product is not an error; these variants only cover the
/// construction and parsing seams.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A domain invariant was violated (e.g. two products share an id).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier or enumerated value could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        assert_eq!(
            DomainError::invariant("duplicate product id 2").to_string(),
            "invariant violated: duplicate product id 2"
        );
        assert_eq!(
            DomainError::invalid_id("ProductId: abc").to_string(),
            "invalid identifier: ProductId: abc"
        );
    }
}
