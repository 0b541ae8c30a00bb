//! Error types for spatial operations.

/// Errors that can occur during spatial operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SpatialError {
    /// The grid resolution must be positive and finite.
    #[error("grid resolution must be positive and finite, got {0}")]
    InvalidResolution(f64),
}
