//! Truncated power series with per-term traces.
//!
//! - [`TaylorCosine`]: Maclaurin expansion of `cos(x)` compared against the
//!   platform cosine

mod taylor;

pub use taylor::{factorial, power, TaylorApproximation, TaylorCosine};
