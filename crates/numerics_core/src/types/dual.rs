//! Dual number type integration for automatic differentiation.
//!
//! A dual number `a + b·ε` with `ε² = 0` carries a value and its derivative
//! through ordinary arithmetic, so evaluating `f` on `x + 1·ε` yields
//! `f(x) + f'(x)·ε`. The Newton solver uses this to step without an
//! explicit derivative.
//!
//! ```
//! use numerics_core::types::dual::DualNumber;
//!
//! let x = DualNumber::new(3.0, 1.0);
//! let y = x * x - DualNumber::from(4.0);
//! assert_eq!(y.re, 5.0);
//! assert_eq!(y.eps, 6.0);
//! ```

/// Type alias for num-dual's Dual64 (f64-based dual numbers).
///
/// - `re`: Real part (function value)
/// - `eps`: Dual part (derivative)
///
/// `DualNumber` does NOT implement `num_traits::Float`, so functions that
/// should be differentiated must be written against it directly.
pub type DualNumber = num_dual::Dual64;
