//! Error types for planning operations.
//!
//! Planning itself never fails: segment search always produces some path
//! through its fallback tiers. Errors are therefore limited to construction
//! time, when a configuration is rejected before any planning happens.

/// Errors that can occur when setting up a planner.
///
/// # Example
///
/// ```
/// use waypath_types::PlanError;
///
/// let error = PlanError::invalid_config("grid_resolution must be positive");
/// assert!(error.to_string().contains("grid_resolution"));
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PlanError {
    /// An invalid configuration parameter was provided.
    ///
    /// Check the configuration values for valid ranges.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PlanError {
    /// Creates an invalid configuration error with the given message.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Returns `true` if this is an invalid configuration error.
    #[must_use]
    pub const fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig(_))
    }
}
