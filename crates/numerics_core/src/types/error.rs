//! Error types for structured error handling.
//!
//! The numeric procedures never fail: non-convergence, a vanishing
//! derivative and a non-dominant matrix are all reported inside the
//! returned result. Errors are reserved for malformed parameters:
//! - Solver configuration (tolerance, iteration budget, term count)
//! - Linear system shape (empty, non-square, mismatched lengths)

use thiserror::Error;

/// Parameter validation errors for the iterative solvers.
///
/// # Examples
/// ```
/// use numerics_core::types::SolverError;
///
/// let err = SolverError::DimensionMismatch { expected: 3, actual: 2 };
/// assert_eq!(format!("{}", err), "Dimension mismatch: expected length 3, got 2");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Tolerance was zero, negative or NaN.
    #[error("Tolerance must be positive, got {tolerance}")]
    InvalidTolerance {
        /// The rejected tolerance
        tolerance: f64,
    },

    /// Iteration budget of zero.
    #[error("Maximum iterations must be greater than zero")]
    InvalidMaxIterations,

    /// Series truncated to zero terms.
    #[error("Term count must be greater than zero")]
    InvalidTermCount,

    /// Linear system without equations.
    #[error("Linear system has no equations")]
    EmptySystem,

    /// A coefficient row whose length differs from the number of rows.
    #[error("Coefficient matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Index of the offending row
        row: usize,
        /// Length of the offending row
        len: usize,
        /// Number of rows in the matrix
        expected: usize,
    },

    /// A vector whose length does not match the system size.
    #[error("Dimension mismatch: expected length {expected}, got {actual}")]
    DimensionMismatch {
        /// System size
        expected: usize,
        /// Length supplied
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_tolerance_display() {
        let err = SolverError::InvalidTolerance { tolerance: -1.0 };
        assert_eq!(format!("{}", err), "Tolerance must be positive, got -1");
    }

    #[test]
    fn test_not_square_display() {
        let err = SolverError::NotSquare {
            row: 1,
            len: 2,
            expected: 3,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("row 1"));
        assert!(msg.contains("expected 3"));
    }

    #[test]
    fn test_unit_variants_display() {
        assert_eq!(
            format!("{}", SolverError::InvalidMaxIterations),
            "Maximum iterations must be greater than zero"
        );
        assert_eq!(
            format!("{}", SolverError::InvalidTermCount),
            "Term count must be greater than zero"
        );
        assert_eq!(
            format!("{}", SolverError::EmptySystem),
            "Linear system has no equations"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&SolverError::EmptySystem);
    }

    #[test]
    fn test_clone_and_eq() {
        let err = SolverError::DimensionMismatch {
            expected: 3,
            actual: 4,
        };
        assert_eq!(err.clone(), err);
    }
}
