//! Shared value types for the iterative solvers.
//!
//! This module provides:
//! - `records`: Iteration trace records and the [`ConvergenceResult`] summary
//! - `error`: Parameter validation errors ([`SolverError`])
//! - `dual`: Dual number alias for derivative-free Newton steps (when `num-dual-mode` is enabled)

#[cfg(feature = "num-dual-mode")]
pub mod dual;
pub mod error;
pub mod records;

// Re-export commonly used types at module level
pub use error::SolverError;
pub use records::{
    ConvergenceResult, IterationRecord, JacobiIterationRecord, TaylorTermRecord, Termination,
};
