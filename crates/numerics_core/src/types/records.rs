//! Iteration trace records and convergence summaries.
//!
//! Every solve produces an ordered, append-only sequence of records plus a
//! [`ConvergenceResult`]. Records are plain values: they are built once
//! during a single call and handed to the caller, never shared between
//! calls.

use num_traits::Float;

/// Why an iterative procedure stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The step error fell below the tolerance.
    Converged,

    /// The iteration budget ran out before the tolerance was met.
    MaxIterationsReached,

    /// Newton-Raphson stopped because `|f'(x)|` fell below the guard.
    DerivativeNearZero {
        /// The x value where the derivative vanished
        x: f64,
    },
}

impl Termination {
    /// Returns `true` only for [`Termination::Converged`].
    pub fn is_converged(&self) -> bool {
        matches!(self, Termination::Converged)
    }
}

/// One Newton-Raphson step.
///
/// `x_next = x - fx / dfx` and `error = |x_next - x|`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationRecord<T: Float> {
    /// 1-based step number
    pub index: usize,
    /// Iterate at the start of the step
    pub x: T,
    /// f(x)
    pub fx: T,
    /// f'(x)
    pub dfx: T,
    /// Iterate produced by the step
    pub x_next: T,
    /// Absolute step size `|x_next - x|`
    pub error: T,
}

/// One Jacobi sweep.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JacobiIterationRecord<T: Float> {
    /// 1-based sweep number
    pub index: usize,
    /// Solution vector after the sweep
    pub solution: Vec<T>,
    /// Largest component change during the sweep
    pub max_error: T,
}

/// One Taylor series term.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaylorTermRecord<T: Float> {
    /// 0-based term index
    pub n: usize,
    /// Value of the n-th addend
    pub term_value: T,
    /// Partial sum including this term
    pub cumulative_approximation: T,
}

/// Outcome of an iterative solve.
///
/// # Type Parameters
///
/// * `T` - Floating-point type of the error metric
/// * `V` - Type of the final value: a scalar for root finding, a vector
///   for linear systems
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceResult<T: Float, V = T> {
    /// Whether the tolerance was met.
    pub converged: bool,
    /// Last computed value(s).
    pub value: V,
    /// Error of the last completed step; infinite when no step completed.
    pub final_error: T,
    /// Number of completed steps (equals the trace length).
    pub iterations_used: usize,
    /// Stopping reason.
    pub termination: Termination,
}

impl<T: Float, V> ConvergenceResult<T, V> {
    pub(crate) fn new(
        value: V,
        final_error: T,
        iterations_used: usize,
        termination: Termination,
    ) -> Self {
        Self {
            converged: termination.is_converged(),
            value,
            final_error,
            iterations_used,
            termination,
        }
    }
}
