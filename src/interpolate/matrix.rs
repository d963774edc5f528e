use std::ops::Index;

use nalgebra::DMatrix;

use crate::error::SolveError;

/// Matrix of the interpolation system.
///
/// Row `i` holds the powers of `x_i` from `x_i^degree` down to `x_i^0`.
#[derive(Debug, PartialEq, Clone)]
pub struct CoefficientMatrix {
    inner: DMatrix<f64>,
}

impl CoefficientMatrix {
    /// Builds a matrix from rows, which must all have the same length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, SolveError> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(SolveError::RaggedRow {
                row,
                expected: cols,
                got: bad.len(),
            });
        }

        let entries: Vec<f64> = rows.iter().flatten().copied().collect();
        Ok(CoefficientMatrix {
            inner: DMatrix::from_row_slice(rows.len(), cols, &entries),
        })
    }

    pub fn rows(&self) -> usize {
        self.inner.nrows()
    }

    pub fn cols(&self) -> usize {
        self.inner.ncols()
    }

    pub fn is_square(&self) -> bool {
        self.inner.is_square()
    }

    pub fn as_dmatrix(&self) -> &DMatrix<f64> {
        &self.inner
    }

    // largest absolute entry of column j
    pub fn column_scale(&self, j: usize) -> f64 {
        self.inner.column(j).amax()
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.inner
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }
}

impl From<DMatrix<f64>> for CoefficientMatrix {
    fn from(inner: DMatrix<f64>) -> Self {
        CoefficientMatrix { inner }
    }
}

impl Index<(usize, usize)> for CoefficientMatrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.inner[index]
    }
}

/*
    Each x gives one equation of the form
    c_0 x^n + c_1 x^(n-1) + ... + c_(n-1) x + c_n = y

    x = [2, 3], degree = 1
    [[2, 1],
     [3, 1]]
*/
pub fn build_matrix(x_values: &[f64], degree: usize) -> CoefficientMatrix {
    // powi(0) is 1 even for x = 0
    CoefficientMatrix {
        inner: DMatrix::from_fn(x_values.len(), degree + 1, |i, j| {
            x_values[i].powi((degree - j) as i32)
        }),
    }
}
