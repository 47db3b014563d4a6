//! Error types for the particle simulation core
//!
//! Each fallible operation reports through one of the enums below. Nothing in
//! the core recovers from its own errors; callers decide at the call site.

use std::path::PathBuf;

/// Invalid-argument failures raised by [`Vector3`](crate::Vector3) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    /// Scalar division by exactly `0.0`.
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    /// Normalization of a vector whose magnitude is exactly `0.0`.
    #[error("Cannot normalize a zero vector")]
    ZeroMagnitude,
}

/// Errors from sphere mesh generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    /// Latitude or longitude band count was zero.
    #[error("Sphere resolution must be at least 1x1, got {latitudes}x{longitudes}")]
    InvalidResolution {
        /// Requested latitude bands
        latitudes: u32,
        /// Requested longitude bands
        longitudes: u32,
    },
}

/// Errors from loading, saving, or validating simulation settings.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// Settings file could not be read or written
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Settings file contents were not valid JSON for the settings schema
    #[error("Failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),

    /// A setting is outside its accepted range
    #[error("Invalid setting {name}: {message}")]
    InvalidSetting {
        /// Field name of the offending setting
        name: &'static str,
        /// Description of the constraint that was violated
        message: String,
    },
}

impl ScenarioError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScenarioError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(name: &'static str, value: f64, constraint: &str) -> Self {
        ScenarioError::InvalidSetting {
            name,
            message: format!("{constraint}, got {value}"),
        }
    }
}
