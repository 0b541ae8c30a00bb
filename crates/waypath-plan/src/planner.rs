//! Multi-waypoint path planning.
//!
//! The planner threads one smoothed segment between each consecutive pair
//! of waypoints and splices the segments into a single world-space path.
//! Planning is total: segment search degrades through fallback tiers
//! instead of failing, so every call returns a usable path plus statistics
//! describing how hard each segment was to win.

use nalgebra::Point2;
use tracing::{debug, info};
use waypath_spatial::{GridMapper, ObstacleField};
use waypath_types::{PlanError, PlanStats, PlannerConfig, SegmentStats, Waypoint, WorldPath};

use crate::order::{FixedVisitOrder, VisitOrder};
use crate::search::SegmentSearch;
use crate::simplify::corner_cells;
use crate::spline::SplineSmoother;
use crate::walkability::Walkability;

/// A planned path plus per-segment statistics.
#[derive(Debug, Clone, Default)]
pub struct PlanOutcome {
    /// The assembled world-space path. Empty when fewer than two waypoints
    /// were supplied.
    pub path: WorldPath,
    /// One statistics record per planned segment.
    pub stats: PlanStats,
}

/// Grid-based multi-waypoint planner with spline smoothing.
///
/// Construction validates the configuration once; planning itself never
/// errors. The planner holds no mutable state, so one instance can serve
/// any number of [`PathPlanner::plan`] calls, each planned from scratch.
///
/// # Example
///
/// ```
/// use waypath_plan::PathPlanner;
/// use waypath_spatial::ObstacleField;
/// use waypath_types::{PlannerConfig, Waypoint};
/// use nalgebra::Point2;
///
/// let config = PlannerConfig::default().with_grid_resolution(1.0);
/// let planner = PathPlanner::new(config)?;
///
/// let waypoints = [
///     Waypoint::start(Point2::new(0.0, 0.0)),
///     Waypoint::end(Point2::new(5.0, 0.0)),
/// ];
/// let fields: [&dyn ObstacleField; 0] = [];
/// let outcome = planner.plan(&waypoints, &fields);
/// assert_eq!(outcome.path.first(), Some(&Point2::new(0.0, 0.0)));
/// # Ok::<(), waypath_types::PlanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PathPlanner {
    config: PlannerConfig,
    mapper: GridMapper,
}

impl PathPlanner {
    /// Creates a planner from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidConfig`] if any configuration field is
    /// out of range.
    pub fn new(config: PlannerConfig) -> Result<Self, PlanError> {
        config.validate()?;
        let mapper = GridMapper::new(config.grid_resolution())
            .map_err(|e| PlanError::invalid_config(e.to_string()))?;
        Ok(Self { config, mapper })
    }

    /// Returns the planner's configuration.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Returns the world/grid mapper derived from the configuration.
    #[must_use]
    pub const fn mapper(&self) -> &GridMapper {
        &self.mapper
    }

    /// Plans a path visiting the waypoints in order, avoiding the given
    /// obstacle fields.
    ///
    /// Fewer than two waypoints yield an empty path with empty statistics;
    /// that is a valid terminal state, not an error. The returned path
    /// starts at the exact first waypoint position; all later points lie
    /// on or between cell centers, so the final point is the last
    /// waypoint's position quantized to its cell center.
    #[must_use]
    pub fn plan(&self, waypoints: &[Waypoint], fields: &[&dyn ObstacleField]) -> PlanOutcome {
        let order = FixedVisitOrder.arrange(waypoints);
        if order.len() < 2 {
            debug!(count = order.len(), "not enough waypoints to plan");
            return PlanOutcome::default();
        }

        let walkability =
            Walkability::new(self.mapper, self.config.clearance_radius(), fields);
        let search = SegmentSearch::new(&walkability, self.config.max_iterations_per_segment());
        let smoother = SplineSmoother::new(&walkability, self.config.smoothing_factor());

        let mut stats = PlanStats::new();
        // The path keeps the caller's exact start position; everything
        // after it comes from the grid.
        let mut points: Vec<Point2<f64>> = vec![waypoints[order[0]].position];

        for pair in order.windows(2) {
            let from = waypoints[pair[0]].position;
            let to = waypoints[pair[1]].position;
            let start_cell = self.mapper.world_to_grid(&from);
            let end_cell = self.mapper.world_to_grid(&to);

            let outcome = search.find(start_cell, end_cell);
            debug!(
                ?start_cell,
                ?end_cell,
                iterations = outcome.iterations,
                tier = ?outcome.tier,
                cells = outcome.path.len(),
                "segment planned"
            );
            stats.record(SegmentStats {
                start: start_cell,
                end: end_cell,
                iterations: outcome.iterations,
                tier: outcome.tier,
                cell_count: outcome.path.len(),
            });

            let corners = corner_cells(&outcome.path);
            let segment = if self.config.smoothing_enabled() {
                smoother.smooth(&corners).into_points()
            } else {
                corners
                    .iter()
                    .map(|&c| self.mapper.grid_to_world(c))
                    .collect()
            };
            // Each segment's first point duplicates the previous segment's
            // terminus (or the start cell the exact start maps into).
            points.extend(segment.into_iter().skip(1));
        }

        let path = WorldPath::new(points);
        info!(
            segments = stats.segment_count(),
            points = path.len(),
            length = path.length(),
            fallback = stats.any_fallback(),
            "plan assembled"
        );
        PlanOutcome { path, stats }
    }
}
