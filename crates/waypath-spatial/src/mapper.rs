//! World/grid coordinate mapping.

use nalgebra::Point2;

use crate::{GridCoord, SpatialError};

/// Converts between continuous world coordinates and discrete grid cells.
///
/// The mapping is round-based: a world point maps to the cell whose center
/// is nearest, so cell `(cx, cy)` covers the half-open square
/// `[cx*r - r/2, cx*r + r/2) x [cy*r - r/2, cy*r + r/2)` where `r` is the
/// resolution. A world point survives a round trip through the grid to
/// within half a cell on each axis, and cell centers round-trip exactly.
///
/// # Example
///
/// ```
/// use waypath_spatial::{GridCoord, GridMapper};
/// use nalgebra::Point2;
///
/// let mapper = GridMapper::new(0.5)?;
/// assert_eq!(mapper.world_to_grid(&Point2::new(1.1, -0.2)), GridCoord::new(2, 0));
/// assert_eq!(mapper.grid_to_world(GridCoord::new(2, 0)), Point2::new(1.0, 0.0));
/// # Ok::<(), waypath_spatial::SpatialError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMapper {
    resolution: f64,
}

impl GridMapper {
    /// Creates a mapper with the given cell resolution in world units.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::InvalidResolution`] if the resolution is not
    /// positive and finite.
    pub fn new(resolution: f64) -> Result<Self, SpatialError> {
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(SpatialError::InvalidResolution(resolution));
        }
        Ok(Self { resolution })
    }

    /// Returns the cell resolution in world units.
    #[must_use]
    pub const fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Maps a world point to the grid cell whose center is nearest.
    #[must_use]
    pub fn world_to_grid(&self, point: &Point2<f64>) -> GridCoord {
        #[allow(clippy::cast_possible_truncation)]
        GridCoord::new(
            (point.x / self.resolution).round() as i32,
            (point.y / self.resolution).round() as i32,
        )
    }

    /// Maps a grid cell to its center in world coordinates.
    #[must_use]
    pub fn grid_to_world(&self, coord: GridCoord) -> Point2<f64> {
        Point2::new(
            f64::from(coord.x) * self.resolution,
            f64::from(coord.y) * self.resolution,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rejects_bad_resolutions() {
        assert!(GridMapper::new(0.0).is_err());
        assert!(GridMapper::new(-1.0).is_err());
        assert!(GridMapper::new(f64::NAN).is_err());
        assert!(GridMapper::new(f64::INFINITY).is_err());
        assert!(GridMapper::new(0.25).is_ok());
    }

    #[test]
    fn rounding_picks_nearest_center() {
        let mapper = GridMapper::new(1.0).unwrap();
        assert_eq!(mapper.world_to_grid(&Point2::new(0.49, 0.0)), GridCoord::new(0, 0));
        assert_eq!(mapper.world_to_grid(&Point2::new(0.51, 0.0)), GridCoord::new(1, 0));
        assert_eq!(mapper.world_to_grid(&Point2::new(-0.51, -1.6)), GridCoord::new(-1, -2));
    }

    #[test]
    fn cell_centers_round_trip_exactly() {
        let mapper = GridMapper::new(0.5).unwrap();
        for coord in [GridCoord::new(0, 0), GridCoord::new(7, -3), GridCoord::new(-12, 5)] {
            assert_eq!(mapper.world_to_grid(&mapper.grid_to_world(coord)), coord);
        }
    }

    #[test]
    fn round_trip_stays_within_half_cell() {
        let mapper = GridMapper::new(0.4).unwrap();
        let point = Point2::new(1.03, -2.77);
        let back = mapper.grid_to_world(mapper.world_to_grid(&point));
        assert!((back.x - point.x).abs() <= 0.2 + 1e-12);
        assert!((back.y - point.y).abs() <= 0.2 + 1e-12);
        assert_relative_eq!(back.x, 1.2);
        assert_relative_eq!(back.y, -2.8);
    }
}
