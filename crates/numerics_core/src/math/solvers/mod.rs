//! Iterative solvers that record every step.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: Scalar root finding from a function/derivative
//!   pair (or a dual-number function with `num-dual-mode`)
//! - [`JacobiSolver`]: Linear systems `A x = b` by simultaneous sweeps
//!
//! ## Configuration
//!
//! Both solvers use [`SolverConfig`] for:
//! - `tolerance`: Step error below which the run is converged
//! - `max_iterations`: Hard bound on the number of steps
//!
//! ## Failure Reporting
//!
//! Solves never return errors. Non-convergence, a vanishing derivative and
//! a non-dominant matrix are flags in the returned solution, alongside the
//! full trace.
//!
//! ## Examples
//!
//! ```
//! use numerics_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! let solver = NewtonRaphsonSolver::new(SolverConfig::fast());
//!
//! let solution = solver.solve(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, 1.0);
//!
//! assert!(solution.result.converged);
//! assert!((solution.result.value - std::f64::consts::SQRT_2).abs() < 1e-6);
//! ```

mod config;
mod jacobi;
mod newton_raphson;

// Re-export public types at module level
pub use config::SolverConfig;
pub use jacobi::{JacobiSolution, JacobiSolver};
pub use newton_raphson::{NewtonRaphsonSolver, NewtonSolution, DERIVATIVE_GUARD};
