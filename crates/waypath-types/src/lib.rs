//! Core types for the waypath planner.
//!
//! This crate defines the vocabulary shared by the planning crates:
//!
//! - [`Waypoint`] and [`WaypointRole`] - Positions to visit and their
//!   place in the visiting order
//! - [`CellPath`] and [`WorldPath`] - Paths in grid and world space
//! - [`PlannerConfig`] - Validated planner configuration
//! - [`PlanStats`] and [`SegmentStats`] - Search effort and fallback
//!   tiers per segment
//! - [`PlanError`] - Construction-time failures
//!
//! Types here carry no planning logic; the algorithms live in
//! `waypath-plan`.
//!
//! # Example
//!
//! ```
//! use waypath_types::{order_by_role, PlannerConfig, Waypoint};
//! use nalgebra::Point2;
//!
//! let mut stops = vec![
//!     Waypoint::end(Point2::new(4.0, 4.0)),
//!     Waypoint::start(Point2::new(0.0, 0.0)),
//!     Waypoint::ordinal(Point2::new(2.0, 1.0), 0),
//! ];
//! order_by_role(&mut stops);
//!
//! let config = PlannerConfig::new().with_grid_resolution(0.25);
//! config.validate()?;
//! # Ok::<(), waypath_types::PlanError>(())
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod error;
mod path;
mod stats;
mod waypoint;

pub use config::{
    DEFAULT_CLEARANCE_FACTOR, DEFAULT_GRID_RESOLUTION, DEFAULT_MAX_ITERATIONS_PER_SEGMENT,
    DEFAULT_SMOOTHING_FACTOR, PlannerConfig,
};
pub use error::PlanError;
pub use path::{CellPath, WorldPath};
pub use stats::{PlanStats, SegmentStats, SegmentTier};
pub use waypoint::{Waypoint, WaypointRole, order_by_role};
