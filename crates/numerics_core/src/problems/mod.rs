//! Worked problem instances.
//!
//! - [`break_even`]: Production level where profit crosses zero, solved
//!   with Newton-Raphson
//! - [`circuit`]: Mesh currents of a three-loop resistor network, solved
//!   with Jacobi iteration

pub mod break_even;
pub mod circuit;
