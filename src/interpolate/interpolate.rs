use std::fmt;

use log::{debug, warn};
use serde_json::Value;

use crate::config::InterpolatorConfig;
use crate::error::{InterpolationError, Result};
use crate::evaluate::dense::{dense_magnitude, dense_repr};
use crate::interpolate::matrix::build_matrix;
use crate::interpolate::solve::LinearSolver;
use crate::point::{points_from_json, points_from_rows, split_points, Point};

/// Finds the polynomial of degree `n - 1` through `n` points.
///
/// Coefficients come back highest power first. The system is solved with the
/// configured [`LinearSolver`], and the answer is checked against the input
/// before it is returned: a solution that does not reproduce every `y` is
/// reported as [`InterpolationError::IllConditioned`].
///
/// Vandermonde systems lose accuracy quickly as the number of points grows,
/// so expect this to be useful for tens of points rather than thousands.
pub struct Interpolator {
    config: InterpolatorConfig,
    solver: Box<dyn LinearSolver>,
}

impl Interpolator {
    pub fn new(config: InterpolatorConfig) -> Self {
        Interpolator {
            solver: config.solver.build(config.pivot_tolerance),
            config,
        }
    }

    /// Swaps in a custom solver; the config's solver choice is ignored.
    pub fn with_solver(mut self, solver: impl LinearSolver + 'static) -> Self {
        self.solver = Box::new(solver);
        self
    }

    pub fn config(&self) -> &InterpolatorConfig {
        &self.config
    }

    pub fn solver_name(&self) -> &'static str {
        self.solver.name()
    }

    pub fn interpolate(&self, points: &[Point]) -> Result<Vec<f64>> {
        let (xs, ys) = split_points(points)?;
        let degree = xs.len() - 1;
        debug!(
            "interpolating {} points (degree {}) with {} solver",
            xs.len(),
            degree,
            self.solver.name()
        );

        let matrix = build_matrix(&xs, degree);
        let coefficients = self.solver.solve(&matrix, &ys)?;
        self.check_residuals(&xs, &ys, &coefficients)?;

        debug!("coefficients: {:?}", coefficients);
        Ok(coefficients)
    }

    pub fn interpolate_rows<R: AsRef<[f64]>>(&self, rows: &[R]) -> Result<Vec<f64>> {
        self.interpolate(&points_from_rows(rows)?)
    }

    pub fn interpolate_json(&self, value: &Value) -> Result<Vec<f64>> {
        self.interpolate(&points_from_json(value)?)
    }

    fn check_residuals(&self, xs: &[f64], ys: &[f64], coefficients: &[f64]) -> Result<()> {
        let tolerance = self.config.residual_tolerance;

        for (index, (&x, &y)) in xs.iter().zip(ys).enumerate() {
            let residual = (dense_repr(x, coefficients) - y).abs();
            let scale = dense_magnitude(x, coefficients).max(y.abs()).max(1.0);

            // NaN fails this too
            if !(residual <= tolerance * scale) {
                warn!(
                    "point {} is off by {:e} (allowed {:e})",
                    index,
                    residual,
                    tolerance * scale
                );
                return Err(InterpolationError::IllConditioned { index, residual });
            }
        }

        Ok(())
    }
}

impl Default for Interpolator {
    fn default() -> Self {
        Interpolator::new(InterpolatorConfig::default())
    }
}

impl fmt::Debug for Interpolator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpolator")
            .field("config", &self.config)
            .field("solver", &self.solver.name())
            .finish()
    }
}

/// Interpolates with the default settings. See [`Interpolator`].
pub fn interpolate(points: &[Point]) -> Result<Vec<f64>> {
    Interpolator::default().interpolate(points)
}

/// Like [`interpolate`], for rows that still have to be checked for length.
pub fn interpolate_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Vec<f64>> {
    Interpolator::default().interpolate_rows(rows)
}

/// Like [`interpolate`], for a JSON array of `[x, y]` pairs.
pub fn interpolate_json(value: &Value) -> Result<Vec<f64>> {
    Interpolator::default().interpolate_json(value)
}
