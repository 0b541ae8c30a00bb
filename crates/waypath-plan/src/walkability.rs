//! Walkability queries over obstacle fields.
//!
//! The planner talks to the world through this adapter: it turns grid
//! cells into world points, applies the clearance radius, and ORs the
//! answer across every obstacle source.

use nalgebra::Point2;
use waypath_spatial::{GridCoord, GridMapper, ObstacleField, segment_cells};

/// Cell- and line-level walkability checks against a set of obstacle
/// fields.
///
/// A cell is walkable when no field reports an obstacle within the
/// clearance radius of its center. The clearance radius is fixed at
/// construction, derived from the planner configuration.
///
/// # Example
///
/// ```
/// use waypath_plan::Walkability;
/// use waypath_spatial::{GridCoord, GridMapper, GridObstacles, ObstacleField};
///
/// let mapper = GridMapper::new(1.0)?;
/// let mut obstacles = GridObstacles::new(1.0)?;
/// obstacles.insert(GridCoord::new(3, 0));
///
/// let fields: [&dyn ObstacleField; 1] = [&obstacles];
/// let walkability = Walkability::new(mapper, 0.6, &fields);
/// assert!(walkability.is_walkable(GridCoord::new(0, 0)));
/// assert!(!walkability.is_walkable(GridCoord::new(3, 0)));
/// # Ok::<(), waypath_spatial::SpatialError>(())
/// ```
pub struct Walkability<'a> {
    mapper: GridMapper,
    clearance_radius: f64,
    fields: &'a [&'a dyn ObstacleField],
}

impl<'a> Walkability<'a> {
    /// Creates an adapter over the given obstacle fields.
    #[must_use]
    pub const fn new(
        mapper: GridMapper,
        clearance_radius: f64,
        fields: &'a [&'a dyn ObstacleField],
    ) -> Self {
        Self {
            mapper,
            clearance_radius,
            fields,
        }
    }

    /// Returns the coordinate mapper.
    #[must_use]
    pub const fn mapper(&self) -> &GridMapper {
        &self.mapper
    }

    /// Returns the clearance radius in world units.
    #[must_use]
    pub const fn clearance_radius(&self) -> f64 {
        self.clearance_radius
    }

    /// Returns `true` if a world point is clear of every obstacle field
    /// within the clearance radius.
    #[must_use]
    pub fn is_point_walkable(&self, point: &Point2<f64>) -> bool {
        !self
            .fields
            .iter()
            .any(|field| field.is_obstacle_within(point, self.clearance_radius))
    }

    /// Returns `true` if the center of the given cell is walkable.
    #[must_use]
    pub fn is_walkable(&self, cell: GridCoord) -> bool {
        self.is_point_walkable(&self.mapper.grid_to_world(cell))
    }

    /// Returns `true` if the straight segment between two world points
    /// crosses an obstacle.
    ///
    /// Checks every cell the segment passes through, plus the segment
    /// midpoint as a second sample against near-corner cuts.
    #[must_use]
    pub fn line_blocked(&self, a: &Point2<f64>, b: &Point2<f64>) -> bool {
        if segment_cells(a, b, &self.mapper)
            .into_iter()
            .any(|cell| !self.is_walkable(cell))
        {
            return true;
        }
        let mid = nalgebra::center(a, b);
        !self.is_walkable(self.mapper.world_to_grid(&mid))
    }
}
