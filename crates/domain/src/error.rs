//! Unified error types for the domain layer
//!
//! Every fallible customizer operation returns `DomainError`, so the
//! storefront can decide how to surface it (warning toast, error toast)
//! without matching on strings.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Tried to add a soap while the selection set is already at its ceiling
    #[error("Selection limit reached: {current}/{max} soaps")]
    SelectionLimitExceeded { current: usize, max: usize },

    /// Checkout attempted with a selection count outside `[min, max]`
    #[error("Select between {min} and {max} soaps to continue ({selected} selected)")]
    ValidationFailed {
        selected: usize,
        min: usize,
        max: usize,
    },

    /// A value object or option was rejected
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for rejected values.
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::validation("Soap name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or format.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a selection limit error
    pub fn selection_limit(current: usize, max: usize) -> Self {
        Self::SelectionLimitExceeded { current, max }
    }

    /// Create a checkout validation error
    pub fn validation_failed(selected: usize, min: usize, max: usize) -> Self {
        Self::ValidationFailed { selected, min, max }
    }

    /// Whether the error should be shown as a warning rather than an error.
    ///
    /// Hitting the selection ceiling is expected while browsing; a failed
    /// checkout is not.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::SelectionLimitExceeded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: name cannot be empty");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown shape: hexagon");
        assert!(matches!(err, DomainError::Parse(_)));
        assert!(err.to_string().contains("hexagon"));
    }

    #[test]
    fn test_selection_limit_error() {
        let err = DomainError::selection_limit(9, 9);
        assert!(matches!(err, DomainError::SelectionLimitExceeded { .. }));
        assert_eq!(err.to_string(), "Selection limit reached: 9/9 soaps");
        assert!(err.is_warning());
    }

    #[test]
    fn test_validation_failed_error() {
        let err = DomainError::validation_failed(2, 3, 5);
        assert_eq!(
            err.to_string(),
            "Select between 3 and 5 soaps to continue (2 selected)"
        );
        assert!(!err.is_warning());
    }
}
