//! Error types for polynomial interpolation

use thiserror::Error;

/// Result type alias using the interpolation error
pub type Result<T> = std::result::Result<T, InterpolationError>;

/// What is wrong with a single input point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointDefect {
    /// The point does not have exactly two components
    Arity(usize),
    /// A component is not a number
    NonNumeric,
    /// A component is NaN or infinite
    NonFinite,
}

/// Errors that can occur while interpolating a point set
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// The points argument is not a sequence
    #[error("points must be a list, got {found}")]
    TypeMismatch {
        /// Name of the kind of value that was supplied
        found: &'static str,
    },

    /// A point in the input is malformed
    #[error("{}", describe_point(.index, .defect))]
    InvalidPoint {
        /// Position of the offending point
        index: usize,
        /// What is wrong with it
        defect: PointDefect,
    },

    /// No points were supplied
    #[error("at least one point is required")]
    Empty,

    /// The linear system has no unique solution
    #[error("interpolation system has no unique solution (no pivot in column {column})")]
    Singular {
        /// Column of the matrix without a usable pivot
        column: usize,
    },

    /// The solver was handed a system of the wrong shape
    #[error("linear solver rejected the system: {source}")]
    Solver { source: SolveError },

    /// The solver returned coefficients that do not reproduce the input
    #[error("interpolation system is ill-conditioned: residual {residual:e} at point {index}")]
    IllConditioned {
        /// Point whose y-value is not reproduced
        index: usize,
        /// Absolute difference between p(x) and y at that point
        residual: f64,
    },
}

impl InterpolationError {
    /// True for the numerical failures, as opposed to malformed input.
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::Singular { .. } | Self::IllConditioned { .. })
    }

    /// Index of the offending point, where one is known.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::InvalidPoint { index, .. } | Self::IllConditioned { index, .. } => Some(*index),
            _ => None,
        }
    }
}

impl From<SolveError> for InterpolationError {
    fn from(err: SolveError) -> Self {
        match err {
            SolveError::Singular { column } => InterpolationError::Singular { column },
            source => InterpolationError::Solver { source },
        }
    }
}

fn describe_point(index: &usize, defect: &PointDefect) -> String {
    match defect {
        PointDefect::Arity(_) => format!("length of point at index {} is not 2", index),
        PointDefect::NonNumeric => format!("point at index {} has a non-numeric component", index),
        PointDefect::NonFinite => format!("point at index {} has a non-finite component", index),
    }
}

/// Errors reported by a dense linear solver
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SolveError {
    /// The matrix is not square
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Right-hand side length does not match the matrix
    #[error("right-hand side has {got} entries, expected {expected}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Rows of different lengths
    #[error("row {row} has {got} entries, expected {expected}")]
    RaggedRow { row: usize, expected: usize, got: usize },

    /// No usable pivot in a column
    #[error("matrix is singular (no pivot in column {column})")]
    Singular { column: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_message_names_index() {
        let err = InterpolationError::InvalidPoint {
            index: 3,
            defect: PointDefect::Arity(1),
        };
        assert_eq!(err.to_string(), "length of point at index 3 is not 2");
        assert_eq!(err.index(), Some(3));
        assert!(!err.is_singular());
    }

    #[test]
    fn test_solver_error_converts_to_singular() {
        let err: InterpolationError = SolveError::Singular { column: 1 }.into();
        assert!(err.is_singular());
        assert_eq!(err, InterpolationError::Singular { column: 1 });
        assert_eq!(err.index(), None);
    }

    #[test]
    fn test_shape_errors_are_not_singular() {
        for source in [
            SolveError::NotSquare { rows: 3, cols: 2 },
            SolveError::DimensionMismatch {
                expected: 2,
                got: 3,
            },
            SolveError::RaggedRow {
                row: 1,
                expected: 3,
                got: 4,
            },
        ] {
            let err: InterpolationError = source.into();
            assert_eq!(err, InterpolationError::Solver { source });
            assert!(!err.is_singular());
        }
    }
}
