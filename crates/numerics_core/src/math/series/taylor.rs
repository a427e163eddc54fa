//! Maclaurin series for cosine.
//!
//! ```text
//! cos(x) = Σ_{n≥0} (-1)^n x^{2n} / (2n)!
//! ```
//!
//! Powers and factorials are evaluated by repeated multiplication on every
//! call, with nothing cached between calls. In `f64`, `(2n)!` overflows to
//! infinity once `2n > 170`, after which the terms collapse to zero (or NaN
//! when `x^{2n}` has overflowed too). That boundary is left unguarded.

use crate::types::{SolverError, TaylorTermRecord};
use num_traits::Float;
use tracing::debug;

/// Partial sums of a truncated cosine series and their accuracy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaylorApproximation<T: Float> {
    /// Evaluation point.
    pub x: T,
    /// One record per term, `n = 0..term_count`.
    pub terms: Vec<TaylorTermRecord<T>>,
    /// Sum of all terms.
    pub approximation: T,
    /// `cos(x)` from the platform implementation.
    pub exact_value: T,
    /// `|exact_value - approximation|`.
    pub absolute_error: T,
    /// `absolute_error / |exact_value| · 100`, in percent.
    ///
    /// Non-finite when `exact_value` is exactly zero; see
    /// [`TaylorApproximation::relative_error_checked`].
    pub relative_error: T,
}

impl<T: Float> TaylorApproximation<T> {
    /// Relative error in percent, or `None` when the exact value is zero.
    pub fn relative_error_checked(&self) -> Option<T> {
        if self.exact_value == T::zero() {
            None
        } else {
            Some(self.relative_error)
        }
    }

    /// Partial sums in term order.
    pub fn partial_sums(&self) -> Vec<T> {
        self.terms.iter().map(|t| t.cumulative_approximation).collect()
    }

    /// The exact value repeated once per term, for plotting against
    /// [`TaylorApproximation::partial_sums`].
    pub fn exact_series(&self) -> Vec<T> {
        vec![self.exact_value; self.terms.len()]
    }
}

/// Truncated Taylor expansion of `cos(x)` about zero.
///
/// # Example
///
/// ```
/// use numerics_core::math::series::TaylorCosine;
///
/// let series = TaylorCosine::new(20);
/// let result = series.approximate(std::f64::consts::PI);
///
/// assert_eq!(result.terms.len(), 20);
/// assert!((result.approximation + 1.0).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaylorCosine {
    term_count: usize,
}

impl TaylorCosine {
    /// Create an expansion truncated to `term_count` terms.
    ///
    /// # Panics
    ///
    /// Panics if `term_count == 0`. Use [`TaylorCosine::try_new`] for
    /// user-supplied values.
    pub fn new(term_count: usize) -> Self {
        assert!(term_count > 0, "term_count must be > 0");
        Self { term_count }
    }

    /// Create an expansion, rejecting a zero term count.
    pub fn try_new(term_count: usize) -> Result<Self, SolverError> {
        if term_count == 0 {
            return Err(SolverError::InvalidTermCount);
        }
        Ok(Self { term_count })
    }

    /// Number of terms summed.
    pub fn term_count(&self) -> usize {
        self.term_count
    }

    /// Sum the series at `x` and compare against `cos(x)`.
    pub fn approximate<T: Float>(&self, x: T) -> TaylorApproximation<T> {
        let mut approximation = T::zero();
        let mut terms = Vec::with_capacity(self.term_count);

        for n in 0..self.term_count {
            let sign = if n % 2 == 0 { T::one() } else { -T::one() };
            let term = sign * power(x, 2 * n) / factorial(2 * n);
            approximation = approximation + term;
            terms.push(TaylorTermRecord {
                n,
                term_value: term,
                cumulative_approximation: approximation,
            });
        }

        let exact_value = x.cos();
        let absolute_error = (exact_value - approximation).abs();
        let hundred = T::from(100.0).unwrap_or_else(T::nan);
        let relative_error = absolute_error / exact_value.abs() * hundred;

        debug!(
            terms = self.term_count,
            absolute_error = absolute_error.to_f64().unwrap_or(f64::NAN),
            "taylor cosine"
        );

        TaylorApproximation {
            x,
            terms,
            approximation,
            exact_value,
            absolute_error,
            relative_error,
        }
    }
}

/// `k!` by repeated multiplication.
pub fn factorial<T: Float>(k: usize) -> T {
    let mut result = T::one();
    let mut factor = T::one();
    for _ in 2..=k {
        factor = factor + T::one();
        result = result * factor;
    }
    result
}

/// `x^k` by repeated multiplication; `x^0 = 1` for every `x`.
pub fn power<T: Float>(x: T, k: usize) -> T {
    let mut result = T::one();
    for _ in 0..k {
        result = result * x;
    }
    result
}
