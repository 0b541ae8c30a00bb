//! Grid cell coordinate types.

use core::ops::{Add, Neg, Sub};

use nalgebra::{Point2, Vector2};

/// A discrete 2D coordinate in grid space.
///
/// Uses `i32` coordinates to support both positive and negative indices,
/// allowing the grid origin to be placed anywhere in world space.
///
/// # Example
///
/// ```
/// use waypath_spatial::GridCoord;
///
/// let coord = GridCoord::new(1, 2);
/// assert_eq!(coord.x, 1);
/// assert_eq!(coord.y, 2);
///
/// // Supports negative coordinates
/// let neg_coord = GridCoord::new(-5, -10);
/// assert_eq!(neg_coord.x, -5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoord {
    /// X coordinate (width axis).
    pub x: i32,
    /// Y coordinate (depth axis).
    pub y: i32,
}

impl GridCoord {
    /// Creates a new grid coordinate.
    ///
    /// # Example
    ///
    /// ```
    /// use waypath_spatial::GridCoord;
    ///
    /// let coord = GridCoord::new(10, 20);
    /// assert_eq!(coord.x, 10);
    /// ```
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Creates a coordinate at the origin (0, 0).
    ///
    /// # Example
    ///
    /// ```
    /// use waypath_spatial::GridCoord;
    ///
    /// let origin = GridCoord::origin();
    /// assert_eq!(origin, GridCoord::new(0, 0));
    /// ```
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Returns the coordinate as a tuple.
    #[must_use]
    pub const fn as_tuple(self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Returns the coordinate as an array.
    #[must_use]
    pub const fn as_array(self) -> [i32; 2] {
        [self.x, self.y]
    }

    /// Converts to a floating-point point.
    ///
    /// # Example
    ///
    /// ```
    /// use waypath_spatial::GridCoord;
    /// use nalgebra::Point2;
    ///
    /// let coord = GridCoord::new(1, 2);
    /// assert_eq!(coord.to_point(), Point2::new(1.0, 2.0));
    /// ```
    #[must_use]
    pub fn to_point(self) -> Point2<f64> {
        Point2::new(f64::from(self.x), f64::from(self.y))
    }

    /// Converts to a floating-point vector.
    #[must_use]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(f64::from(self.x), f64::from(self.y))
    }

    /// Returns the 4 edge-adjacent neighbors (von Neumann neighborhood).
    ///
    /// # Example
    ///
    /// ```
    /// use waypath_spatial::GridCoord;
    ///
    /// let neighbors = GridCoord::origin().edge_neighbors();
    /// assert_eq!(neighbors.len(), 4);
    /// assert!(neighbors.contains(&GridCoord::new(1, 0)));
    /// assert!(neighbors.contains(&GridCoord::new(0, -1)));
    /// ```
    #[must_use]
    pub const fn edge_neighbors(self) -> [Self; 4] {
        [
            Self::new(self.x.wrapping_add(1), self.y),
            Self::new(self.x.wrapping_sub(1), self.y),
            Self::new(self.x, self.y.wrapping_add(1)),
            Self::new(self.x, self.y.wrapping_sub(1)),
        ]
    }

    /// Returns all 8 neighbors (Moore neighborhood), including diagonals.
    ///
    /// # Example
    ///
    /// ```
    /// use waypath_spatial::GridCoord;
    ///
    /// let neighbors = GridCoord::origin().all_neighbors();
    /// assert_eq!(neighbors.len(), 8);
    /// assert!(neighbors.contains(&GridCoord::new(-1, 1)));
    /// ```
    #[must_use]
    pub const fn all_neighbors(self) -> [Self; 8] {
        [
            Self::new(self.x.wrapping_add(1), self.y),
            Self::new(self.x.wrapping_sub(1), self.y),
            Self::new(self.x, self.y.wrapping_add(1)),
            Self::new(self.x, self.y.wrapping_sub(1)),
            Self::new(self.x.wrapping_add(1), self.y.wrapping_add(1)),
            Self::new(self.x.wrapping_add(1), self.y.wrapping_sub(1)),
            Self::new(self.x.wrapping_sub(1), self.y.wrapping_add(1)),
            Self::new(self.x.wrapping_sub(1), self.y.wrapping_sub(1)),
        ]
    }

    /// Computes the Manhattan distance to another coordinate.
    ///
    /// # Example
    ///
    /// ```
    /// use waypath_spatial::GridCoord;
    ///
    /// let a = GridCoord::new(0, 0);
    /// let b = GridCoord::new(3, 4);
    /// assert_eq!(a.manhattan_distance(b), 7);
    /// ```
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.saturating_add(dy)
    }

    /// Computes the Chebyshev distance to another coordinate.
    ///
    /// This is the number of king moves between the two cells on an
    /// 8-connected grid.
    ///
    /// # Example
    ///
    /// ```
    /// use waypath_spatial::GridCoord;
    ///
    /// let a = GridCoord::new(0, 0);
    /// let b = GridCoord::new(3, 4);
    /// assert_eq!(a.chebyshev_distance(b), 4);
    /// ```
    #[must_use]
    pub const fn chebyshev_distance(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        if dx > dy { dx } else { dy }
    }

    /// Returns the per-axis sign of the offset from `self` to `other`,
    /// each component clamped to `{-1, 0, 1}`.
    ///
    /// # Example
    ///
    /// ```
    /// use waypath_spatial::GridCoord;
    ///
    /// let a = GridCoord::new(2, 5);
    /// let b = GridCoord::new(7, 3);
    /// assert_eq!(a.direction_to(b), (1, -1));
    /// assert_eq!(a.direction_to(a), (0, 0));
    /// ```
    #[must_use]
    pub const fn direction_to(self, other: Self) -> (i32, i32) {
        (
            (other.x.wrapping_sub(self.x)).signum(),
            (other.y.wrapping_sub(self.y)).signum(),
        )
    }

    /// Returns the cell one unit step from `self` in the given direction.
    ///
    /// Directions outside `{-1, 0, 1}` are accepted and simply added.
    #[must_use]
    pub const fn stepped(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }

    /// Checked addition, returning `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match (self.x.checked_add(other.x), self.y.checked_add(other.y)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Checked subtraction, returning `None` on overflow.
    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match (self.x.checked_sub(other.x), self.y.checked_sub(other.y)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }
}

impl Add for GridCoord {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x.wrapping_add(other.x), self.y.wrapping_add(other.y))
    }
}

impl Sub for GridCoord {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x.wrapping_sub(other.x), self.y.wrapping_sub(other.y))
    }
}

impl Neg for GridCoord {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.x.wrapping_neg(), self.y.wrapping_neg())
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for GridCoord {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<GridCoord> for (i32, i32) {
    fn from(coord: GridCoord) -> Self {
        coord.as_tuple()
    }
}

impl From<GridCoord> for [i32; 2] {
    fn from(coord: GridCoord) -> Self {
        coord.as_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Construction Tests ====================

    #[test]
    fn new_stores_components() {
        let coord = GridCoord::new(3, -7);
        assert_eq!(coord.x, 3);
        assert_eq!(coord.y, -7);
    }

    #[test]
    fn origin_is_zero() {
        assert_eq!(GridCoord::origin(), GridCoord::new(0, 0));
    }

    #[test]
    fn default_is_origin() {
        assert_eq!(GridCoord::default(), GridCoord::origin());
    }

    // ==================== Conversion Tests ====================

    #[test]
    fn tuple_and_array_round_trip() {
        let coord = GridCoord::new(5, -2);
        assert_eq!(GridCoord::from(coord.as_tuple()), coord);
        assert_eq!(GridCoord::from(coord.as_array()), coord);
        assert_eq!(<(i32, i32)>::from(coord), (5, -2));
        assert_eq!(<[i32; 2]>::from(coord), [5, -2]);
    }

    #[test]
    fn to_point_matches_components() {
        let point = GridCoord::new(-1, 4).to_point();
        assert_eq!(point, Point2::new(-1.0, 4.0));
    }

    // ==================== Neighbor Tests ====================

    #[test]
    fn edge_neighbors_are_unit_manhattan() {
        let center = GridCoord::new(2, 3);
        for n in center.edge_neighbors() {
            assert_eq!(center.manhattan_distance(n), 1);
        }
    }

    #[test]
    fn all_neighbors_are_unit_chebyshev_and_distinct() {
        let center = GridCoord::new(-4, 9);
        let neighbors = center.all_neighbors();
        for n in neighbors {
            assert_eq!(center.chebyshev_distance(n), 1);
        }
        for (i, a) in neighbors.iter().enumerate() {
            for b in &neighbors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    // ==================== Distance Tests ====================

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = GridCoord::new(-3, 2);
        let b = GridCoord::new(4, -5);
        assert_eq!(a.manhattan_distance(b), 14);
        assert_eq!(b.manhattan_distance(a), 14);
    }

    #[test]
    fn chebyshev_distance_takes_max_axis() {
        let a = GridCoord::new(0, 0);
        assert_eq!(a.chebyshev_distance(GridCoord::new(2, 9)), 9);
        assert_eq!(a.chebyshev_distance(GridCoord::new(-9, 2)), 9);
    }

    // ==================== Direction Tests ====================

    #[test]
    fn direction_to_clamps_to_unit() {
        let a = GridCoord::new(0, 0);
        assert_eq!(a.direction_to(GridCoord::new(10, -3)), (1, -1));
        assert_eq!(a.direction_to(GridCoord::new(0, 7)), (0, 1));
        assert_eq!(a.direction_to(a), (0, 0));
    }

    #[test]
    fn stepped_applies_offset() {
        assert_eq!(GridCoord::new(1, 1).stepped(1, -1), GridCoord::new(2, 0));
    }

    // ==================== Arithmetic Tests ====================

    #[test]
    fn add_sub_neg() {
        let a = GridCoord::new(1, 2);
        let b = GridCoord::new(3, -4);
        assert_eq!(a + b, GridCoord::new(4, -2));
        assert_eq!(a - b, GridCoord::new(-2, 6));
        assert_eq!(-b, GridCoord::new(-3, 4));
    }

    #[test]
    fn checked_ops_catch_overflow() {
        let max = GridCoord::new(i32::MAX, 0);
        assert_eq!(max.checked_add(GridCoord::new(1, 0)), None);
        assert_eq!(
            max.checked_sub(GridCoord::new(1, 0)),
            Some(GridCoord::new(i32::MAX - 1, 0))
        );
    }
}
