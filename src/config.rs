//! Interpolator settings.
//!
//! Settings can be built in code or read from a TOML file:
//!
//! ```toml
//! solver = "lu"
//! pivot_tolerance = 0.0
//! residual_tolerance = 1e-8
//! ```
//!
//! Missing keys fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::interpolate::solve::{InverseSolver, LinearSolver, LuSolver, DEFAULT_PIVOT_TOLERANCE};

/// Largest accepted `|p(x_i) - y_i|`, relative to the size of the terms at `x_i`.
pub const DEFAULT_RESIDUAL_TOLERANCE: f64 = 1e-8;

/// Which direct method solves the interpolation system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverKind {
    /// LU decomposition with partial pivoting
    #[default]
    Lu,
    /// Explicit matrix inverse
    Inverse,
}

impl SolverKind {
    pub fn build(self, pivot_tolerance: f64) -> Box<dyn LinearSolver> {
        match self {
            SolverKind::Lu => Box::new(LuSolver { pivot_tolerance }),
            SolverKind::Inverse => Box::new(InverseSolver { pivot_tolerance }),
        }
    }
}

impl std::str::FromStr for SolverKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lu" => Ok(SolverKind::Lu),
            "inverse" => Ok(SolverKind::Inverse),
            other => Err(ConfigError::Invalid(format!("unknown solver '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpolatorConfig {
    pub solver: SolverKind,
    /// Pivots at or below `pivot_tolerance` times the largest entry of their
    /// column make the system singular. Zero rejects exact zeros only.
    pub pivot_tolerance: f64,
    pub residual_tolerance: f64,
}

impl Default for InterpolatorConfig {
    fn default() -> Self {
        InterpolatorConfig {
            solver: SolverKind::Lu,
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
            residual_tolerance: DEFAULT_RESIDUAL_TOLERANCE,
        }
    }
}

/// Errors from reading or checking a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl InterpolatorConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: InterpolatorConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("pivot_tolerance", self.pivot_tolerance),
            ("residual_tolerance", self.residual_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
