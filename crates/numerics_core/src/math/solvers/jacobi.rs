//! Jacobi iteration for square linear systems.
//!
//! # Algorithm
//!
//! Each sweep updates every unknown from the previous sweep's vector:
//!
//! ```text
//! x_j^{(k+1)} = (b_j - Σ_{i≠j} a_ji x_i^{(k)}) / a_jj
//! ```
//!
//! Unlike Gauss-Seidel, no component sees values updated earlier in the
//! same sweep. The sweep error is `max_j |x_j^{(k+1)} - x_j^{(k)}|`.
//!
//! # Preconditions
//!
//! Division by `a_jj` is unguarded: a zero diagonal entry yields
//! non-finite components. Strict diagonal dominance guarantees convergence;
//! its absence is reported in [`JacobiSolution::diagonal_dominant`] but the
//! solve still runs.

use super::SolverConfig;
use crate::math::LinearSystem;
use crate::types::{ConvergenceResult, JacobiIterationRecord, SolverError, Termination};
use num_traits::Float;
use tracing::{debug, warn};

/// Trace and summary of a Jacobi run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JacobiSolution<T: Float> {
    /// One record per sweep, in order.
    pub iterations: Vec<JacobiIterationRecord<T>>,
    /// Final solution vector and stopping reason.
    pub result: ConvergenceResult<T, Vec<T>>,
    /// Result of the diagonal-dominance pre-check.
    pub diagonal_dominant: bool,
}

/// Jacobi iterative solver.
///
/// # Example
///
/// ```
/// use numerics_core::math::LinearSystem;
/// use numerics_core::math::solvers::{JacobiSolver, SolverConfig};
///
/// let system = LinearSystem::new(
///     vec![
///         vec![10.0_f64, -2.0, -4.0],
///         vec![-2.0, 8.0, -2.0],
///         vec![-4.0, -2.0, 10.0],
///     ],
///     vec![12.0, 0.0, 0.0],
/// ).unwrap();
///
/// let solver = JacobiSolver::new(SolverConfig::new(1e-6, 100));
/// let solution = solver.solve(&system);
///
/// assert!(solution.diagonal_dominant);
/// assert!(solution.result.converged);
/// assert!((solution.result.value[1] - 0.6).abs() < 1e-5);
/// ```
#[derive(Debug, Clone)]
pub struct JacobiSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> JacobiSolver<T> {
    /// Create a new Jacobi solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Solve starting from the zero vector.
    pub fn solve(&self, system: &LinearSystem<T>) -> JacobiSolution<T> {
        self.sweep_from(system, vec![T::zero(); system.size()])
    }

    /// Solve starting from `initial`.
    ///
    /// # Errors
    ///
    /// [`SolverError::DimensionMismatch`] if `initial` has the wrong length.
    pub fn solve_from(
        &self,
        system: &LinearSystem<T>,
        initial: &[T],
    ) -> Result<JacobiSolution<T>, SolverError> {
        system.check_len(initial.len())?;
        Ok(self.sweep_from(system, initial.to_vec()))
    }

    fn sweep_from(&self, system: &LinearSystem<T>, mut x: Vec<T>) -> JacobiSolution<T> {
        let diagonal_dominant = system.is_diagonally_dominant();
        if !diagonal_dominant {
            warn!("matrix is not diagonally dominant, convergence is not guaranteed");
        }

        let matrix = system.matrix();
        let rhs = system.rhs();
        let mut iterations = Vec::new();
        let mut max_error = T::infinity();

        for index in 1..=self.config.max_iterations {
            let x_new: Vec<T> = matrix
                .iter()
                .zip(rhs)
                .enumerate()
                .map(|(j, (row, &b))| {
                    let sum = row
                        .iter()
                        .zip(&x)
                        .enumerate()
                        .filter(|&(k, _)| k != j)
                        .fold(b, |acc, (_, (&a, &xk))| acc - a * xk);
                    sum / row[j]
                })
                .collect();

            // NaN differences must survive the max so they never read as converged
            max_error = x_new.iter().zip(&x).fold(T::zero(), |acc, (&new, &old)| {
                let diff = (new - old).abs();
                if diff.is_nan() || diff > acc {
                    diff
                } else {
                    acc
                }
            });

            debug!(
                iteration = index,
                max_error = max_error.to_f64().unwrap_or(f64::NAN),
                "jacobi sweep"
            );
            iterations.push(JacobiIterationRecord {
                index,
                solution: x_new.clone(),
                max_error,
            });
            x = x_new;

            if max_error < self.config.tolerance {
                return JacobiSolution {
                    result: ConvergenceResult::new(
                        x,
                        max_error,
                        iterations.len(),
                        Termination::Converged,
                    ),
                    iterations,
                    diagonal_dominant,
                };
            }
        }

        JacobiSolution {
            result: ConvergenceResult::new(
                x,
                max_error,
                iterations.len(),
                Termination::MaxIterationsReached,
            ),
            iterations,
            diagonal_dominant,
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn circuit() -> LinearSystem<f64> {
        LinearSystem::new(
            vec![
                vec![10.0, -2.0, -4.0],
                vec![-2.0, 8.0, -2.0],
                vec![-4.0, -2.0, 10.0],
            ],
            vec![12.0, 0.0, 0.0],
        )
        .unwrap()
    }

    #[test]
    fn test_circuit_converges_to_direct_solution() {
        let solver = JacobiSolver::new(SolverConfig::new(1e-6, 100));

        let solution = solver.solve(&circuit());

        assert!(solution.diagonal_dominant);
        assert!(solution.result.converged);
        assert_eq!(solution.result.iterations_used, 25);
        let x = &solution.result.value;
        assert_relative_eq!(x[0], 57.0 / 35.0, epsilon = 1e-5);
        assert_relative_eq!(x[1], 0.6, epsilon = 1e-5);
        assert_relative_eq!(x[2], 27.0 / 35.0, epsilon = 1e-5);
    }

    #[test]
    fn test_first_sweep_from_zero() {
        let solver = JacobiSolver::new(SolverConfig::new(1e-6, 100));

        let first = &solver.solve(&circuit()).iterations[0];

        // x1 = b / diag with all other unknowns at zero
        assert_eq!(first.index, 1);
        assert_eq!(first.solution, vec![1.2, 0.0, 0.0]);
        assert_relative_eq!(first.max_error, 1.2);
    }

    #[test]
    fn test_second_sweep_uses_previous_vector_only() {
        let solver = JacobiSolver::new(SolverConfig::new(1e-6, 100));

        let second = &solver.solve(&circuit()).iterations[1];

        // Gauss-Seidel would give x3 = (4·1.2 + 2·0.3) / 10 here
        assert_relative_eq!(second.solution[0], 1.2);
        assert_relative_eq!(second.solution[1], 0.3);
        assert_relative_eq!(second.solution[2], 0.48);
        assert_relative_eq!(second.max_error, 0.48);
    }

    #[test]
    fn test_max_iterations_reached() {
        let solver = JacobiSolver::new(SolverConfig::new(1e-6, 5));

        let solution = solver.solve(&circuit());

        assert!(!solution.result.converged);
        assert_eq!(solution.result.termination, Termination::MaxIterationsReached);
        assert_eq!(solution.iterations.len(), 5);
        assert_eq!(solution.result.value, solution.iterations[4].solution);
        assert_eq!(solution.result.final_error, solution.iterations[4].max_error);
    }

    #[test]
    fn test_non_dominant_still_solves() {
        // Row 0 is not dominant but the spectral radius is sqrt(0.2)
        let system = LinearSystem::new(
            vec![vec![1.0, 2.0], vec![0.1, 1.0]],
            vec![3.0, 1.1],
        )
        .unwrap();
        let solver = JacobiSolver::new(SolverConfig::new(1e-10, 200));

        let solution = solver.solve(&system);

        assert!(!solution.diagonal_dominant);
        assert!(solution.result.converged);
        assert_relative_eq!(solution.result.value[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(solution.result.value[1], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_divergent_system_reports_non_convergence() {
        let system =
            LinearSystem::new(vec![vec![1.0, 3.0], vec![3.0, 1.0]], vec![4.0, 4.0]).unwrap();
        let solver = JacobiSolver::new(SolverConfig::new(1e-6, 20));

        let solution = solver.solve(&system);

        assert!(!solution.diagonal_dominant);
        assert!(!solution.result.converged);
        assert_eq!(solution.iterations.len(), 20);
    }

    #[test]
    fn test_zero_diagonal_is_non_finite() {
        let system =
            LinearSystem::new(vec![vec![0.0, 1.0], vec![1.0, 2.0]], vec![1.0, 1.0]).unwrap();
        let solver = JacobiSolver::new(SolverConfig::new(1e-6, 3));

        let solution = solver.solve(&system);

        assert!(!solution.iterations[0].solution[0].is_finite());
        assert!(solution.iterations[2].max_error.is_nan());
        assert!(!solution.result.converged);
    }

    #[test]
    fn test_solve_from_exact_solution_converges_in_one_sweep() {
        let solver = JacobiSolver::new(SolverConfig::new(1e-9, 100));
        let exact = [57.0 / 35.0, 0.6, 27.0 / 35.0];

        let solution = solver.solve_from(&circuit(), &exact).unwrap();

        assert!(solution.result.converged);
        assert_eq!(solution.result.iterations_used, 1);
    }

    #[test]
    fn test_solve_from_wrong_length() {
        let solver: JacobiSolver<f64> = JacobiSolver::with_defaults();
        assert_eq!(
            solver.solve_from(&circuit(), &[0.0; 2]).unwrap_err(),
            SolverError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        );
    }
}
