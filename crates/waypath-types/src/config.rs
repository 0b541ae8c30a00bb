//! Planner configuration.
//!
//! # Example
//!
//! ```
//! use waypath_types::PlannerConfig;
//!
//! let config = PlannerConfig::new()
//!     .with_grid_resolution(0.25)
//!     .with_max_iterations_per_segment(10_000)
//!     .with_smoothing_factor(0.8);
//! assert!(config.validate().is_ok());
//! ```

use crate::PlanError;

/// Default cell size in world units.
pub const DEFAULT_GRID_RESOLUTION: f64 = 0.1;
/// Default A* iteration budget per waypoint pair.
pub const DEFAULT_MAX_ITERATIONS_PER_SEGMENT: usize = 5_000;
/// Default smoothing intensity.
pub const DEFAULT_SMOOTHING_FACTOR: f64 = 0.8;
/// Default clearance radius as a fraction of the grid resolution.
pub const DEFAULT_CLEARANCE_FACTOR: f64 = 0.6;

/// Configuration for the path planner.
///
/// Controls grid granularity, the per-segment search budget, and the
/// smoothing stage. Values are validated once, when a planner is built.
///
/// Note that the iteration budget and the resolution are coupled: halving
/// the resolution roughly quadruples the number of cells a segment of the
/// same world length covers, so the budget should grow accordingly.
///
/// # Example
///
/// ```
/// use waypath_types::PlannerConfig;
///
/// // Corner path only, no spline pass
/// let config = PlannerConfig::new().with_smoothing_enabled(false);
/// assert!(!config.smoothing_enabled());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    /// Cell size in world units.
    grid_resolution: f64,
    /// A* iteration budget per waypoint pair.
    max_iterations_per_segment: usize,
    /// Smoothing intensity; scales the per-corner sample count.
    smoothing_factor: f64,
    /// Clearance radius as a fraction of the grid resolution.
    clearance_factor: f64,
    /// Whether the spline pass runs at all.
    smoothing_enabled: bool,
}

impl PlannerConfig {
    /// Creates a configuration with default settings.
    ///
    /// Defaults:
    /// - Grid resolution: 0.1 world units
    /// - Iteration budget: 5000 per segment
    /// - Smoothing factor: 0.8
    /// - Clearance factor: 0.6
    /// - Smoothing: enabled
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grid_resolution: DEFAULT_GRID_RESOLUTION,
            max_iterations_per_segment: DEFAULT_MAX_ITERATIONS_PER_SEGMENT,
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            clearance_factor: DEFAULT_CLEARANCE_FACTOR,
            smoothing_enabled: true,
        }
    }

    /// Sets the cell size in world units.
    #[must_use]
    pub const fn with_grid_resolution(mut self, resolution: f64) -> Self {
        self.grid_resolution = resolution;
        self
    }

    /// Sets the A* iteration budget per waypoint pair.
    ///
    /// When the budget runs out the planner falls back to cheaper tiers
    /// rather than failing.
    #[must_use]
    pub const fn with_max_iterations_per_segment(mut self, budget: usize) -> Self {
        self.max_iterations_per_segment = budget;
        self
    }

    /// Sets the smoothing intensity.
    ///
    /// Each corner segment is sampled `max(6, round(12 * factor))` times,
    /// so larger factors yield denser, rounder curves.
    #[must_use]
    pub const fn with_smoothing_factor(mut self, factor: f64) -> Self {
        self.smoothing_factor = factor;
        self
    }

    /// Sets the clearance radius as a fraction of the grid resolution.
    #[must_use]
    pub const fn with_clearance_factor(mut self, factor: f64) -> Self {
        self.clearance_factor = factor;
        self
    }

    /// Enables or disables the spline pass.
    ///
    /// With smoothing disabled the planner emits the simplified corner
    /// path directly.
    #[must_use]
    pub const fn with_smoothing_enabled(mut self, enabled: bool) -> Self {
        self.smoothing_enabled = enabled;
        self
    }

    /// Returns the cell size in world units.
    #[must_use]
    pub const fn grid_resolution(&self) -> f64 {
        self.grid_resolution
    }

    /// Returns the A* iteration budget per waypoint pair.
    #[must_use]
    pub const fn max_iterations_per_segment(&self) -> usize {
        self.max_iterations_per_segment
    }

    /// Returns the smoothing intensity.
    #[must_use]
    pub const fn smoothing_factor(&self) -> f64 {
        self.smoothing_factor
    }

    /// Returns the clearance radius fraction.
    #[must_use]
    pub const fn clearance_factor(&self) -> f64 {
        self.clearance_factor
    }

    /// Returns the clearance radius in world units.
    #[must_use]
    pub fn clearance_radius(&self) -> f64 {
        self.clearance_factor * self.grid_resolution
    }

    /// Returns whether the spline pass runs.
    #[must_use]
    pub const fn smoothing_enabled(&self) -> bool {
        self.smoothing_enabled
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidConfig`] if any value is out of range:
    /// the resolution and clearance factor must be positive and finite,
    /// the iteration budget nonzero, and the smoothing factor within
    /// `[0, 1]`.
    pub fn validate(&self) -> Result<(), PlanError> {
        if !self.grid_resolution.is_finite() || self.grid_resolution <= 0.0 {
            return Err(PlanError::invalid_config(format!(
                "grid_resolution must be positive and finite, got {}",
                self.grid_resolution
            )));
        }
        if self.max_iterations_per_segment == 0 {
            return Err(PlanError::invalid_config(
                "max_iterations_per_segment must be nonzero",
            ));
        }
        if !self.smoothing_factor.is_finite()
            || !(0.0..=1.0).contains(&self.smoothing_factor)
        {
            return Err(PlanError::invalid_config(format!(
                "smoothing_factor must be within [0, 1], got {}",
                self.smoothing_factor
            )));
        }
        if !self.clearance_factor.is_finite() || self.clearance_factor <= 0.0 {
            return Err(PlanError::invalid_config(format!(
                "clearance_factor must be positive and finite, got {}",
                self.clearance_factor
            )));
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}
