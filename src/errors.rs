//! Shared error types used across submodules.

use thiserror::Error;

use crate::geometry::GeometryError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum CoilFieldError {
    /// Wraps coil parameter validation errors.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// Raised when a trace or sampling configuration is invalid.
    #[error("configuration error: {0}")]
    InvalidConfig(String),
}
