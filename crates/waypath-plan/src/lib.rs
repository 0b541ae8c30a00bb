//! Grid-based multi-waypoint path planning with spline smoothing.
//!
//! This crate is the planning layer on top of `waypath-spatial` grids and
//! the `waypath-types` domain types. Planning one path runs a fixed
//! pipeline per consecutive waypoint pair:
//!
//! 1. **Segment search** ([`SegmentSearch`]): budget-bounded A* over the
//!    8-connected grid, degrading through a greedy walker and finally a
//!    direct line instead of failing
//! 2. **Corner simplification** ([`corner_cells`]): collapse collinear
//!    runs, keeping only direction changes
//! 3. **Spline smoothing** ([`SplineSmoother`]): Catmull-Rom sampling
//!    through the corners, with collision-aware bisection backoff
//!
//! [`PathPlanner`] drives the pipeline and splices the segments into one
//! world-space path.
//!
//! # Quick Start
//!
//! ```
//! use waypath_plan::PathPlanner;
//! use waypath_spatial::{GridCoord, GridObstacles, ObstacleField};
//! use waypath_types::{PlannerConfig, Waypoint};
//! use nalgebra::Point2;
//!
//! // Obstacle store on the same resolution as the planner
//! let mut obstacles = GridObstacles::new(1.0)?;
//! for y in -3..=3 {
//!     obstacles.insert(GridCoord::new(5, y));
//! }
//! obstacles.remove(GridCoord::new(5, 2));
//!
//! let config = PlannerConfig::default()
//!     .with_grid_resolution(1.0)
//!     .with_clearance_factor(0.4);
//! let planner = PathPlanner::new(config)?;
//!
//! let waypoints = [
//!     Waypoint::start(Point2::new(0.0, 0.0)),
//!     Waypoint::end(Point2::new(10.0, 0.0)),
//! ];
//! let fields: [&dyn ObstacleField; 1] = [&obstacles];
//! let outcome = planner.plan(&waypoints, &fields);
//!
//! // Routed through the gap, longer than the straight line
//! assert!(outcome.path.length() > 10.0);
//! assert!(!outcome.stats.any_fallback());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Degradation, not failure
//!
//! Planning is total: when A* exhausts its iteration budget the segment
//! falls back to cheaper tiers, recorded per segment in
//! [`waypath_types::PlanStats`]. Callers that would rather wait for
//! better inputs than accept a degraded path can wrap planning in
//! [`RetryPolicy`], which turns exhaustion into an explicit
//! [`RetryOutcome::GaveUp`] value.

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod order;
mod planner;
mod retry;
mod search;
mod simplify;
mod spline;
mod walkability;

pub use order::{FixedVisitOrder, VisitOrder};
pub use planner::{PathPlanner, PlanOutcome};
pub use retry::{DEFAULT_MAX_ATTEMPTS, RetryOutcome, RetryPolicy};
pub use search::{SegmentOutcome, SegmentSearch};
pub use simplify::corner_cells;
pub use spline::SplineSmoother;
pub use walkability::Walkability;
