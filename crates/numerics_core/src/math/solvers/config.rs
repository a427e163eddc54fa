//! Solver configuration types.

use crate::types::SolverError;
use num_traits::Float;

/// Stopping rule shared by the iterative solvers.
///
/// An iteration is converged when its step error drops strictly below
/// `tolerance`; `max_iterations` is the hard bound on the number of steps.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use numerics_core::math::solvers::SolverConfig;
///
/// // Use default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance < 1e-8);
/// assert!(config.max_iterations >= 50);
///
/// // Custom configuration
/// let custom = SolverConfig {
///     tolerance: 1e-6,
///     max_iterations: 50,
/// };
/// assert!(custom.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance.
    ///
    /// The solver stops when the step error is `< tolerance`.
    pub tolerance: T,

    /// Maximum number of iterations before giving up.
    ///
    /// Exhausting the budget is reported as non-convergence in the
    /// result, never as an error.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-10
    /// - `max_iterations`: 100
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap_or_else(T::epsilon),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`. Use
    /// [`SolverConfig::try_new`] for user-supplied values.
    ///
    /// # Example
    ///
    /// ```
    /// use numerics_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-6, 50);
    /// assert_eq!(config.max_iterations, 50);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Create a configuration, rejecting invalid values with an error.
    ///
    /// # Example
    ///
    /// ```
    /// use numerics_core::math::solvers::SolverConfig;
    /// use numerics_core::types::SolverError;
    ///
    /// assert!(SolverConfig::try_new(1e-6, 50).is_ok());
    /// assert_eq!(
    ///     SolverConfig::try_new(1e-6, 0).unwrap_err(),
    ///     SolverError::InvalidMaxIterations
    /// );
    /// ```
    pub fn try_new(tolerance: T, max_iterations: usize) -> Result<Self, SolverError> {
        let config = Self {
            tolerance,
            max_iterations,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the tolerance is positive and the budget non-zero.
    ///
    /// A NaN tolerance is rejected, since no error could ever fall below it.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(self.tolerance > T::zero()) {
            return Err(SolverError::InvalidTolerance {
                tolerance: self.tolerance.to_f64().unwrap_or(f64::NAN),
            });
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidMaxIterations);
        }
        Ok(())
    }

    /// Create a configuration for quick interactive runs.
    ///
    /// Uses relaxed tolerance (1e-6) and fewer iterations (50).
    pub fn fast() -> Self {
        Self {
            tolerance: T::from(1e-6).unwrap_or_else(T::epsilon),
            max_iterations: 50,
        }
    }
}
