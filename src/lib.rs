//! Polynomial interpolation through a set of points.
//!
//! Given `n` points with distinct x-values, [`interpolate`] returns the `n`
//! coefficients of the unique polynomial of degree `n - 1` through them,
//! highest power first. The coefficients come from solving the Vandermonde
//! system `M · c = y` where `M[i][j] = x_i^(n - 1 - j)`.
//!
//! ```
//! // f(x) = 2x
//! let c = poly_interpolate::interpolate(&[(0.0, 0.0), (1.0, 2.0)]).unwrap();
//! assert!((c[0] - 2.0).abs() < 1e-12 && c[1].abs() < 1e-12);
//! ```

pub mod config;
pub mod error;
mod evaluate;
pub mod fixtures;
pub mod interpolate;
pub mod point;

pub use config::{InterpolatorConfig, SolverKind};
pub use error::{InterpolationError, PointDefect, Result, SolveError};
pub use interpolate::interpolate::{interpolate, interpolate_json, interpolate_rows, Interpolator};
pub use interpolate::matrix::{build_matrix, CoefficientMatrix};
pub use interpolate::solve::{InverseSolver, LinearSolver, LuSolver};
pub use point::Point;
