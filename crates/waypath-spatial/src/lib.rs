//! Spatial foundations for the waypath planner.
//!
//! This crate provides the 2D grid layer the planning crates build on:
//!
//! - [`GridCoord`] - Integer grid coordinates
//! - [`GridMapper`] - Round-based world/grid conversion
//! - [`ObstacleField`] - Point-occupancy oracle trait
//! - [`GridObstacles`] - Sparse cell-set obstacle store
//! - [`CellTraversal`] and [`segment_cells`] - Line-of-sight cell walks
//!
//! # Coordinate Mapping
//!
//! World coordinates are continuous `f64` values; grid coordinates are
//! discrete `i32` values. The mapping rounds to the nearest cell center, so
//! cell `(x, y)` covers the half-open square of one resolution centered on
//! `(x * r, y * r)`. Conversions therefore round-trip to within half a cell,
//! and exactly for points on the lattice.
//!
//! # Example
//!
//! ```
//! use waypath_spatial::{GridCoord, GridMapper, GridObstacles, ObstacleField};
//! use nalgebra::Point2;
//!
//! let mapper = GridMapper::new(0.5)?;
//! let mut obstacles = GridObstacles::new(0.5)?;
//! obstacles.insert(GridCoord::new(2, 0));
//!
//! let cell = mapper.world_to_grid(&Point2::new(1.1, 0.1));
//! assert_eq!(cell, GridCoord::new(2, 0));
//! assert!(obstacles.is_obstacle(&mapper.grid_to_world(cell)));
//! # Ok::<(), waypath_spatial::SpatialError>(())
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod cell;
mod error;
mod field;
mod mapper;
mod traverse;

pub use cell::GridCoord;
pub use error::SpatialError;
pub use field::{GridObstacles, ObstacleField};
pub use mapper::GridMapper;
pub use traverse::{CellTraversal, segment_cells};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Vector2};
