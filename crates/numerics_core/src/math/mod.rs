//! Numerical methods.
//!
//! - `solvers`: Newton-Raphson root finding and Jacobi iteration
//! - `series`: Taylor series approximation of cosine
//! - `linear_system`: Square systems `A x = b` consumed by the Jacobi solver

mod linear_system;
pub mod series;
pub mod solvers;

pub use linear_system::LinearSystem;
