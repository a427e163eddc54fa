//! Newton-Raphson root-finding solver with a full iteration trace.

use super::SolverConfig;
use crate::types::{ConvergenceResult, IterationRecord, Termination};
use num_traits::Float;
use tracing::{debug, warn};

/// Derivatives smaller than this in magnitude stop the iteration.
pub const DERIVATIVE_GUARD: f64 = 1e-10;

/// Trace and summary of a Newton-Raphson run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewtonSolution<T: Float> {
    /// One record per completed step, in order.
    pub iterations: Vec<IterationRecord<T>>,
    /// Final iterate and stopping reason.
    pub result: ConvergenceResult<T>,
}

impl<T: Float> NewtonSolution<T> {
    /// Sequence of iterates `x_1, x_2, ...` produced by the steps.
    pub fn iterates(&self) -> Vec<T> {
        self.iterations.iter().map(|r| r.x_next).collect()
    }

    /// The root, if the run converged.
    pub fn root(&self) -> Option<T> {
        self.result.converged.then_some(self.result.value)
    }
}

/// Newton-Raphson root finder that records every step.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)`, stopping when
/// the step size `|x_{n+1} - x_n|` drops below the tolerance.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Failure modes
///
/// None of these are errors; they are reported in the returned
/// [`ConvergenceResult`]:
/// - `|f'(x)| < 1e-10`: the run stops before dividing, with no record for
///   the failed step ([`Termination::DerivativeNearZero`])
/// - the budget runs out ([`Termination::MaxIterationsReached`])
///
/// # Example
///
/// ```
/// use numerics_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// // Solve x² - 4 = 0 from x0 = 3
/// let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-6, 50));
///
/// let solution = solver.solve(|x: f64| x * x - 4.0, |x: f64| 2.0 * x, 3.0);
/// assert!(solution.result.converged);
/// assert!((solution.result.value - 2.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Iterate from `x0` using explicit derivative `f_prime`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find root of
    /// * `f_prime` - Derivative of f
    /// * `x0` - Initial guess
    ///
    /// # Returns
    ///
    /// The trace of completed steps and the final iterate. When no step
    /// completed, `final_error` is infinite and `value` is `x0`.
    pub fn solve<F, G>(&self, f: F, f_prime: G, x0: T) -> NewtonSolution<T>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        self.iterate(|x| (f(x), f_prime(x)), x0)
    }

    fn iterate<E>(&self, eval: E, x0: T) -> NewtonSolution<T>
    where
        E: Fn(T) -> (T, T),
    {
        let guard = T::from(DERIVATIVE_GUARD).unwrap_or_else(T::epsilon);
        let mut x = x0;
        let mut error = T::infinity();
        let mut iterations = Vec::new();

        for index in 1..=self.config.max_iterations {
            let (fx, dfx) = eval(x);

            if dfx.abs() < guard {
                let at = x.to_f64().unwrap_or(f64::NAN);
                warn!(iteration = index, x = at, "derivative near zero, stopping");
                let result = ConvergenceResult::new(
                    x,
                    error,
                    iterations.len(),
                    Termination::DerivativeNearZero { x: at },
                );
                return NewtonSolution { iterations, result };
            }

            let x_next = x - fx / dfx;
            error = (x_next - x).abs();
            iterations.push(IterationRecord {
                index,
                x,
                fx,
                dfx,
                x_next,
                error,
            });
            debug!(
                iteration = index,
                x = x_next.to_f64().unwrap_or(f64::NAN),
                error = error.to_f64().unwrap_or(f64::NAN),
                "newton step"
            );
            x = x_next;

            if error < self.config.tolerance {
                let result =
                    ConvergenceResult::new(x, error, iterations.len(), Termination::Converged);
                return NewtonSolution { iterations, result };
            }
        }

        let result = ConvergenceResult::new(
            x,
            error,
            iterations.len(),
            Termination::MaxIterationsReached,
        );
        NewtonSolution { iterations, result }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

/// AD-enabled Newton-Raphson solver for f64.
#[cfg(feature = "num-dual-mode")]
impl NewtonRaphsonSolver<f64> {
    /// Iterate from `x0` with the derivative computed by dual numbers.
    ///
    /// Behaves exactly like [`NewtonRaphsonSolver::solve`], with `f'(x)`
    /// taken from the dual part of `f(x + ε)`.
    ///
    /// # Example
    ///
    /// ```
    /// use numerics_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    /// use num_dual::Dual64;
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-10, 50));
    ///
    /// let solution = solver.solve_ad(|x: Dual64| x * x - Dual64::from(2.0), 1.0);
    /// assert!((solution.result.value - std::f64::consts::SQRT_2).abs() < 1e-10);
    /// ```
    pub fn solve_ad<F>(&self, f: F, x0: f64) -> NewtonSolution<f64>
    where
        F: Fn(num_dual::Dual64) -> num_dual::Dual64,
    {
        use num_dual::Dual64;

        self.iterate(
            |x| {
                let f_dual = f(Dual64::new(x, 1.0));
                (f_dual.re, f_dual.eps)
            },
            x0,
        )
    }
}
