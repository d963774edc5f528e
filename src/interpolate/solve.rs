use log::{trace, warn};
use nalgebra::{DVector, Dyn, LU};

use crate::error::SolveError;
use crate::interpolate::matrix::CoefficientMatrix;

/// Pivots at or below this fraction of their column's largest entry count as
/// zero. Zero means only exact zeros; conditioning is left to the residual
/// check in the interpolator.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 0.0;

/// Anything that can solve a dense square system `M · c = rhs` directly.
pub trait LinearSolver: Send + Sync {
    fn solve(&self, matrix: &CoefficientMatrix, rhs: &[f64]) -> Result<Vec<f64>, SolveError>;

    fn name(&self) -> &'static str;
}

/// LU decomposition with partial pivoting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuSolver {
    pub pivot_tolerance: f64,
}

/// Explicit inverse, then `M^-1 · rhs`.
///
/// Less accurate than [`LuSolver`] for larger systems; useful as a cross-check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseSolver {
    pub pivot_tolerance: f64,
}

impl Default for LuSolver {
    fn default() -> Self {
        LuSolver {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
        }
    }
}

impl Default for InverseSolver {
    fn default() -> Self {
        InverseSolver {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
        }
    }
}

fn check_square(matrix: &CoefficientMatrix) -> Result<usize, SolveError> {
    if !matrix.is_square() {
        return Err(SolveError::NotSquare {
            rows: matrix.rows(),
            cols: matrix.cols(),
        });
    }
    Ok(matrix.rows())
}

fn check_rhs(matrix: &CoefficientMatrix, rhs: &[f64]) -> Result<(), SolveError> {
    if rhs.len() != matrix.rows() {
        return Err(SolveError::DimensionMismatch {
            expected: matrix.rows(),
            got: rhs.len(),
        });
    }
    Ok(())
}

// factors the matrix and rejects it if any pivot is (essentially) zero
fn factor(
    matrix: &CoefficientMatrix,
    pivot_tolerance: f64,
) -> Result<LU<f64, Dyn, Dyn>, SolveError> {
    let n = check_square(matrix)?;
    let lu = matrix.as_dmatrix().clone().lu();
    let u = lu.u();

    for column in 0..n {
        let pivot = u[(column, column)];
        let threshold = pivot_tolerance * matrix.column_scale(column);
        trace!("column {} pivot {:e}", column, pivot);

        if pivot.abs() <= threshold || !pivot.is_finite() {
            warn!(
                "rejecting pivot {:e} in column {} (threshold {:e})",
                pivot, column, threshold
            );
            return Err(SolveError::Singular { column });
        }
    }

    Ok(lu)
}

impl LinearSolver for LuSolver {
    fn solve(&self, matrix: &CoefficientMatrix, rhs: &[f64]) -> Result<Vec<f64>, SolveError> {
        let lu = factor(matrix, self.pivot_tolerance)?;
        check_rhs(matrix, rhs)?;

        let solution = lu
            .solve(&DVector::from_column_slice(rhs))
            .ok_or(SolveError::Singular {
                column: matrix.rows().saturating_sub(1),
            })?;

        Ok(solution.iter().copied().collect())
    }

    fn name(&self) -> &'static str {
        "lu"
    }
}

impl InverseSolver {
    pub fn invert(&self, matrix: &CoefficientMatrix) -> Result<CoefficientMatrix, SolveError> {
        let lu = factor(matrix, self.pivot_tolerance)?;

        lu.try_inverse()
            .map(CoefficientMatrix::from)
            .ok_or(SolveError::Singular {
                column: matrix.rows().saturating_sub(1),
            })
    }
}

impl LinearSolver for InverseSolver {
    fn solve(&self, matrix: &CoefficientMatrix, rhs: &[f64]) -> Result<Vec<f64>, SolveError> {
        check_square(matrix)?;
        check_rhs(matrix, rhs)?;
        let inverse = self.invert(matrix)?;

        let solution = inverse.as_dmatrix() * DVector::from_column_slice(rhs);
        Ok(solution.iter().copied().collect())
    }

    fn name(&self) -> &'static str {
        "inverse"
    }
}
