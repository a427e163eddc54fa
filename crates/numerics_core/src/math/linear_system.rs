//! Square linear systems `A x = b`.
//!
//! Construction checks shape only. Numeric preconditions (nonzero diagonal,
//! diagonal dominance) are reported, not enforced.

use crate::types::SolverError;
use num_traits::Float;

/// A square linear system with dense row-major coefficients.
///
/// # Example
///
/// ```
/// use numerics_core::math::LinearSystem;
///
/// let system = LinearSystem::new(
///     vec![vec![4.0, 1.0], vec![2.0, 5.0]],
///     vec![1.0, 2.0],
/// ).unwrap();
///
/// assert_eq!(system.size(), 2);
/// assert!(system.is_diagonally_dominant());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLinearSystem<T>"))]
pub struct LinearSystem<T: Float> {
    matrix: Vec<Vec<T>>,
    rhs: Vec<T>,
}

/// Unchecked wire form; deserialisation goes through [`LinearSystem::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLinearSystem<T> {
    matrix: Vec<Vec<T>>,
    rhs: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: Float> TryFrom<RawLinearSystem<T>> for LinearSystem<T> {
    type Error = SolverError;

    fn try_from(raw: RawLinearSystem<T>) -> Result<Self, Self::Error> {
        Self::new(raw.matrix, raw.rhs)
    }
}

impl<T: Float> LinearSystem<T> {
    /// Build a system from its coefficient rows and right-hand side.
    ///
    /// # Errors
    ///
    /// - [`SolverError::EmptySystem`] if there are no rows
    /// - [`SolverError::NotSquare`] if any row length differs from the row count
    /// - [`SolverError::DimensionMismatch`] if `rhs` has the wrong length
    pub fn new(matrix: Vec<Vec<T>>, rhs: Vec<T>) -> Result<Self, SolverError> {
        let n = matrix.len();
        if n == 0 {
            return Err(SolverError::EmptySystem);
        }
        if let Some((row, entries)) = matrix.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(SolverError::NotSquare {
                row,
                len: entries.len(),
                expected: n,
            });
        }
        if rhs.len() != n {
            return Err(SolverError::DimensionMismatch {
                expected: n,
                actual: rhs.len(),
            });
        }
        Ok(Self { matrix, rhs })
    }

    /// Build a system whose shape is fixed by the array types.
    ///
    /// Squareness and the right-hand side length hold by construction.
    /// Unlike [`LinearSystem::new`], `N == 0` is not reported as
    /// [`SolverError::EmptySystem`]; debug builds panic on it instead.
    pub fn from_array<const N: usize>(matrix: [[T; N]; N], rhs: [T; N]) -> Self {
        debug_assert!(N > 0, "linear system has no equations");
        Self {
            matrix: matrix.iter().map(|row| row.to_vec()).collect(),
            rhs: rhs.to_vec(),
        }
    }

    /// Number of equations (and unknowns).
    pub fn size(&self) -> usize {
        self.rhs.len()
    }

    /// Coefficient rows.
    pub fn matrix(&self) -> &[Vec<T>] {
        &self.matrix
    }

    /// Right-hand side.
    pub fn rhs(&self) -> &[T] {
        &self.rhs
    }

    /// Strict row diagonal dominance: `|a_ii| > Σ_{j≠i} |a_ij|` for every row.
    ///
    /// Sufficient, not necessary, for Jacobi convergence. A zero diagonal
    /// entry always fails the check.
    pub fn is_diagonally_dominant(&self) -> bool {
        self.matrix.iter().enumerate().all(|(i, row)| {
            let off_diagonal = row
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(T::zero(), |acc, (_, a)| acc + a.abs());
            row[i].abs() > off_diagonal
        })
    }

    /// Residual vector `A x - b`.
    ///
    /// # Errors
    ///
    /// [`SolverError::DimensionMismatch`] if `x` has the wrong length.
    pub fn residual(&self, x: &[T]) -> Result<Vec<T>, SolverError> {
        self.check_len(x.len())?;
        Ok(self
            .matrix
            .iter()
            .zip(&self.rhs)
            .map(|(row, &b)| {
                row.iter()
                    .zip(x)
                    .fold(T::zero(), |acc, (&a, &xk)| acc + a * xk)
                    - b
            })
            .collect())
    }

    pub(crate) fn check_len(&self, len: usize) -> Result<(), SolverError> {
        if len != self.size() {
            return Err(SolverError::DimensionMismatch {
                expected: self.size(),
                actual: len,
            });
        }
        Ok(())
    }
}
