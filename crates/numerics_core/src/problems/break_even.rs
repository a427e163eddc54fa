//! Break-even point of a cubic-cost production model.
//!
//! ```text
//! revenue(x) = 50x - 0.5x²
//! cost(x)    = 100 + 10x + 0.1x³
//! profit(x)  = revenue(x) - cost(x)
//! ```
//!
//! Profit has two positive roots, near `x ≈ 2.632` and `x ≈ 16.045`; which
//! one Newton-Raphson finds depends on the initial guess.

/// Profit at production level `x`.
pub fn profit(x: f64) -> f64 {
    (50.0 * x - 0.5 * x * x) - (100.0 + 10.0 * x + 0.1 * x * x * x)
}

/// Marginal profit `profit'(x)`.
pub fn profit_derivative(x: f64) -> f64 {
    (50.0 - x) - (10.0 + 0.3 * x * x)
}

/// Profit evaluated on dual numbers, for derivative-free Newton steps.
#[cfg(feature = "num-dual-mode")]
pub fn profit_dual(x: num_dual::Dual64) -> num_dual::Dual64 {
    use num_dual::Dual64;

    let c = |v: f64| Dual64::from(v);
    (c(50.0) * x - c(0.5) * x * x) - (c(100.0) + c(10.0) * x + c(0.1) * x * x * x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_profit_values() {
        assert_relative_eq!(profit(0.0), -100.0);
        assert_relative_eq!(profit(2.0), -22.8, epsilon = 1e-12);
        assert_relative_eq!(profit(3.0), 12.8, epsilon = 1e-12);
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let h = 1e-6;
        for x in [0.5, 2.6, 10.0] {
            let fd = (profit(x + h) - profit(x - h)) / (2.0 * h);
            assert_relative_eq!(profit_derivative(x), fd, epsilon = 1e-5);
        }
    }

    #[cfg(feature = "num-dual-mode")]
    #[test]
    fn test_dual_matches_explicit() {
        let y = profit_dual(num_dual::Dual64::new(4.0, 1.0));
        assert_relative_eq!(y.re, profit(4.0), epsilon = 1e-12);
        assert_relative_eq!(y.eps, profit_derivative(4.0), epsilon = 1e-12);
    }
}
