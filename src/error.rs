//! Error types for route optimization and estimation.

use thiserror::Error;

/// Errors returned by the optimizer and the route estimator.
///
/// Validation happens before any computation, so an error always means no
/// partial work was done.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// A coordinate or configuration value is malformed or out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A route and a distance matrix disagree on the number of locations.
    ///
    /// This indicates a programming error on the caller's side.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Size implied by the route.
        expected: usize,
        /// Size actually found.
        actual: usize,
    },
}

impl RoutingError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_input() {
        let err = RoutingError::invalid("latitude 95 out of range");
        assert_eq!(err.to_string(), "invalid input: latitude 95 out of range");
    }

    #[test]
    fn test_display_dimension_mismatch() {
        let err = RoutingError::DimensionMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 4, got 3");
    }
}
