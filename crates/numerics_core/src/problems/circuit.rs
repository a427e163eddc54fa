//! Mesh currents of a three-loop resistor network.
//!
//! ```text
//!  10 I₁ - 2 I₂ -  4 I₃ = 12
//!  -2 I₁ + 8 I₂ -  2 I₃ =  0
//!  -4 I₁ - 2 I₂ + 10 I₃ =  0
//! ```
//!
//! The matrix is strictly diagonally dominant, so Jacobi iteration
//! converges; the exact currents are `I₁ = 57/35`, `I₂ = 3/5`, `I₃ = 27/35`.

use crate::math::LinearSystem;

/// Coefficient matrix in ohms.
pub const RESISTANCE: [[f64; 3]; 3] = [[10.0, -2.0, -4.0], [-2.0, 8.0, -2.0], [-4.0, -2.0, 10.0]];

/// Source voltages in volts.
pub const VOLTAGE: [f64; 3] = [12.0, 0.0, 0.0];

/// Exact mesh currents in amperes.
pub const EXACT_CURRENTS: [f64; 3] = [57.0 / 35.0, 3.0 / 5.0, 27.0 / 35.0];

/// The network as a [`LinearSystem`].
pub fn system() -> LinearSystem<f64> {
    LinearSystem::from_array(RESISTANCE, VOLTAGE)
}
