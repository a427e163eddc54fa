//! # numerics_core: Iterative Numerical Methods with Full Traces
//!
//! ## Core Layer Role
//!
//! numerics_core is the computational kernel of the workspace, providing:
//! - Newton-Raphson root finding (`math::solvers::NewtonRaphsonSolver`)
//! - Jacobi iteration for square linear systems (`math::solvers::JacobiSolver`)
//! - Taylor series approximation of cosine (`math::series::TaylorCosine`)
//! - Trace records and convergence summaries (`types`)
//! - The fixed-decimal presentation contract (`format`)
//! - Worked problem instances (`problems`)
//!
//! Every procedure is a pure function of its parameters: it allocates its
//! own trace, touches no shared state and performs no I/O beyond `tracing`
//! events. Rendering traces is left to the service layer.
//!
//! ## Usage Examples
//!
//! ```rust
//! use numerics_core::math::series::TaylorCosine;
//! use numerics_core::math::solvers::{JacobiSolver, NewtonRaphsonSolver, SolverConfig};
//! use numerics_core::problems::{break_even, circuit};
//!
//! // Break-even production level
//! let newton = NewtonRaphsonSolver::new(SolverConfig::fast());
//! let root = newton.solve(break_even::profit, break_even::profit_derivative, 1.0);
//! assert!(root.result.converged);
//!
//! // Mesh currents
//! let jacobi = JacobiSolver::new(SolverConfig::new(1e-6, 100));
//! let currents = jacobi.solve(&circuit::system());
//! assert!(currents.diagonal_dominant);
//!
//! // cos(1) from ten terms
//! let series = TaylorCosine::new(10).approximate(1.0_f64);
//! assert!(series.absolute_error < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `num-dual-mode` (default): Newton-Raphson with dual-number derivatives
//! - `serde`: Serialisation for records, results and configuration

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod format;
pub mod math;
pub mod problems;
pub mod types;
