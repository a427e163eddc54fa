//! Fixed-decimal formatting shared by every trace consumer.
//!
//! Values are carried at full precision through the solvers; rounding to a
//! fixed number of decimals happens only when a record is displayed or
//! plotted. The place counts below are the presentation contract:
//!
//! | Quantity | Places |
//! |----------|--------|
//! | Newton and Jacobi trace fields | [`TRACE_PLACES`] |
//! | Final error in a convergence summary | [`FINAL_ERROR_PLACES`] |
//! | Taylor terms, partial sums, exact value and absolute error | [`SERIES_PLACES`] |
//! | Solution vector components in a Jacobi summary | [`CURRENT_PLACES`] |
//! | Relative error, in percent | [`PERCENT_PLACES`] |
//!
//! Exact binary ties (such as `0.125` to two places) round to even.

use num_traits::Float;

/// Decimal places for Newton and Jacobi trace fields.
pub const TRACE_PLACES: usize = 6;

/// Decimal places for the final error of a converged run.
pub const FINAL_ERROR_PLACES: usize = 8;

/// Decimal places for Taylor series values.
pub const SERIES_PLACES: usize = 8;

/// Decimal places for solution vector components in a summary.
pub const CURRENT_PLACES: usize = 4;

/// Decimal places for percentage values.
pub const PERCENT_PLACES: usize = 4;

/// Render `value` with exactly `places` digits after the decimal point.
///
/// Non-finite values render as `NaN`, `Infinity` and `-Infinity`.
///
/// # Examples
/// ```
/// use numerics_core::format::to_fixed;
///
/// assert_eq!(to_fixed(2.0_f64, 6), "2.000000");
/// assert_eq!(to_fixed(-1.0 / 3.0_f64, 4), "-0.3333");
/// assert_eq!(to_fixed(f64::INFINITY, 6), "Infinity");
/// ```
pub fn to_fixed<T: Float>(value: T, places: usize) -> String {
    let v = value.to_f64().unwrap_or(f64::NAN);
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    format!("{:.*}", places, v)
}

/// Round `value` to `places` decimals, as a number.
///
/// Equivalent to parsing [`to_fixed`]'s output, which is what plotted
/// sequences use. Non-finite values pass through unchanged.
///
/// # Examples
/// ```
/// use numerics_core::format::round_to;
///
/// assert_eq!(round_to(2.6321986424714607_f64, 6), 2.632199);
/// ```
pub fn round_to<T: Float>(value: T, places: usize) -> T {
    if !value.is_finite() {
        return value;
    }
    to_fixed(value, places)
        .parse::<f64>()
        .ok()
        .and_then(T::from)
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_pads_and_rounds() {
        assert_eq!(to_fixed(1.5_f64, TRACE_PLACES), "1.500000");
        assert_eq!(to_fixed(0.1234567_f64, TRACE_PLACES), "0.123457");
        assert_eq!(to_fixed(1e-9_f64, FINAL_ERROR_PLACES), "0.00000000");
        assert_eq!(to_fixed(7.587e-7_f64, FINAL_ERROR_PLACES), "0.00000076");
    }

    #[test]
    fn test_to_fixed_negative() {
        assert_eq!(to_fixed(-22.8_f64, 6), "-22.800000");
        assert_eq!(to_fixed(-0.00001_f64, 4), "-0.0000");
    }

    #[test]
    fn test_to_fixed_non_finite() {
        assert_eq!(to_fixed(f64::NAN, 4), "NaN");
        assert_eq!(to_fixed(f64::INFINITY, 4), "Infinity");
        assert_eq!(to_fixed(f64::NEG_INFINITY, 4), "-Infinity");
        assert_eq!(to_fixed(f32::INFINITY, 2), "Infinity");
    }

    #[test]
    fn test_to_fixed_f32() {
        assert_eq!(to_fixed(0.5_f32, 2), "0.50");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456789_f64, 4), 1.2346);
        assert_eq!(round_to(-0.0000004_f64, 6), 0.0);
        assert!(round_to(f64::NAN, 6).is_nan());
        assert_eq!(round_to(f64::INFINITY, 6), f64::INFINITY);
    }

    #[test]
    fn test_zero_places() {
        assert_eq!(to_fixed(3.7_f64, 0), "4");
    }
}
