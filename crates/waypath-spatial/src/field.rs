//! Obstacle field trait and grid-backed obstacle store.

use std::collections::HashSet;
use std::f64::consts::FRAC_PI_4;

use nalgebra::Point2;

use crate::{GridCoord, GridMapper, SpatialError};

/// Number of perimeter samples used by [`ObstacleField::is_obstacle_within`].
const RING_SAMPLES: u32 = 8;

/// A source of point-occupancy queries in world space.
///
/// Planners combine several fields (walls, furniture, dynamic blockers) by
/// asking each in turn; a point is blocked if any field claims it.
///
/// # Example
///
/// ```
/// use waypath_spatial::{GridCoord, GridObstacles, ObstacleField};
/// use nalgebra::Point2;
///
/// let mut obstacles = GridObstacles::new(1.0)?;
/// obstacles.insert(GridCoord::new(2, 0));
/// assert!(obstacles.is_obstacle(&Point2::new(2.1, 0.0)));
/// assert!(!obstacles.is_obstacle(&Point2::new(0.0, 0.0)));
/// # Ok::<(), waypath_spatial::SpatialError>(())
/// ```
pub trait ObstacleField {
    /// Returns `true` if the given world point lies inside an obstacle.
    fn is_obstacle(&self, point: &Point2<f64>) -> bool;

    /// Returns `true` if an obstacle lies within `radius` of the point.
    ///
    /// The default implementation checks the center plus eight evenly
    /// spaced samples on the perimeter circle, approximating a disc
    /// overlap query. Implementations with an exact disc test should
    /// override this.
    fn is_obstacle_within(&self, point: &Point2<f64>, radius: f64) -> bool {
        if self.is_obstacle(point) {
            return true;
        }
        if radius <= 0.0 {
            return false;
        }
        (0..RING_SAMPLES).any(|i| {
            let angle = f64::from(i) * FRAC_PI_4;
            let sample = Point2::new(
                radius.mul_add(angle.cos(), point.x),
                radius.mul_add(angle.sin(), point.y),
            );
            self.is_obstacle(&sample)
        })
    }
}

impl<T: ObstacleField + ?Sized> ObstacleField for &T {
    fn is_obstacle(&self, point: &Point2<f64>) -> bool {
        (**self).is_obstacle(point)
    }

    fn is_obstacle_within(&self, point: &Point2<f64>, radius: f64) -> bool {
        (**self).is_obstacle_within(point, radius)
    }
}

/// A set of occupied cells on a regular lattice, usable as an
/// [`ObstacleField`].
///
/// Cells are stored sparsely, so the field is unbounded: any cell not
/// explicitly inserted is free.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridObstacles {
    mapper: GridMapper,
    cells: HashSet<GridCoord>,
}

impl GridObstacles {
    /// Creates an empty obstacle set on a lattice with the given cell size.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::InvalidResolution`] if `cell_size` is not
    /// positive and finite.
    pub fn new(cell_size: f64) -> Result<Self, SpatialError> {
        Ok(Self {
            mapper: GridMapper::new(cell_size)?,
            cells: HashSet::new(),
        })
    }

    /// Returns the lattice cell size in world units.
    #[must_use]
    pub const fn cell_size(&self) -> f64 {
        self.mapper.resolution()
    }

    /// Marks a cell as occupied. Returns `true` if it was newly inserted.
    pub fn insert(&mut self, coord: GridCoord) -> bool {
        self.cells.insert(coord)
    }

    /// Marks the cell containing a world point as occupied.
    pub fn insert_at(&mut self, point: &Point2<f64>) -> bool {
        self.cells.insert(self.mapper.world_to_grid(point))
    }

    /// Clears a cell. Returns `true` if it was occupied.
    pub fn remove(&mut self, coord: GridCoord) -> bool {
        self.cells.remove(&coord)
    }

    /// Returns `true` if the given cell is occupied.
    #[must_use]
    pub fn contains(&self, coord: GridCoord) -> bool {
        self.cells.contains(&coord)
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cell is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over the occupied cells in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.cells.iter().copied()
    }
}

impl ObstacleField for GridObstacles {
    fn is_obstacle(&self, point: &Point2<f64>) -> bool {
        self.cells.contains(&self.mapper.world_to_grid(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_with(cells: &[(i32, i32)]) -> GridObstacles {
        let mut obstacles = GridObstacles::new(1.0).unwrap();
        for &(x, y) in cells {
            obstacles.insert(GridCoord::new(x, y));
        }
        obstacles
    }

    // ==================== Store Tests ====================

    #[test]
    fn insert_remove_contains() {
        let mut obstacles = GridObstacles::new(0.5).unwrap();
        assert!(obstacles.is_empty());
        assert!(obstacles.insert(GridCoord::new(1, 1)));
        assert!(!obstacles.insert(GridCoord::new(1, 1)));
        assert!(obstacles.contains(GridCoord::new(1, 1)));
        assert_eq!(obstacles.len(), 1);
        assert!(obstacles.remove(GridCoord::new(1, 1)));
        assert!(obstacles.is_empty());
    }

    #[test]
    fn insert_at_uses_rounding() {
        let mut obstacles = GridObstacles::new(1.0).unwrap();
        obstacles.insert_at(&Point2::new(1.9, 0.1));
        assert!(obstacles.contains(GridCoord::new(2, 0)));
    }

    // ==================== Point Query Tests ====================

    #[test]
    fn point_query_matches_cell_membership() {
        let obstacles = field_with(&[(3, -1)]);
        assert!(obstacles.is_obstacle(&Point2::new(3.2, -1.3)));
        assert!(!obstacles.is_obstacle(&Point2::new(3.2, 0.0)));
    }

    // ==================== Clearance Query Tests ====================

    #[test]
    fn clearance_query_catches_nearby_obstacle() {
        let obstacles = field_with(&[(1, 0)]);
        // Center at the edge of cell (0,0): free itself but the ring at
        // radius 0.6 reaches into cell (1,0).
        let point = Point2::new(0.2, 0.0);
        assert!(!obstacles.is_obstacle(&point));
        assert!(obstacles.is_obstacle_within(&point, 0.6));
    }

    #[test]
    fn zero_radius_reduces_to_point_query() {
        let obstacles = field_with(&[(1, 0)]);
        let point = Point2::new(0.2, 0.0);
        assert!(!obstacles.is_obstacle_within(&point, 0.0));
        assert!(obstacles.is_obstacle_within(&Point2::new(1.0, 0.0), 0.0));
    }

    #[test]
    fn clearance_query_works_through_trait_object() {
        let obstacles = field_with(&[(0, 0)]);
        let field: &dyn ObstacleField = &obstacles;
        assert!(field.is_obstacle_within(&Point2::new(0.3, 0.3), 0.1));
    }
}
