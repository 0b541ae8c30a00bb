//! Cell traversal along line segments.
//!
//! This module walks the cells a 2D line passes through using the DDA
//! (Digital Differential Analyzer) algorithm, commonly known as
//! Amanatides & Woo's fast voxel traversal, on the round-based lattice of
//! [`GridMapper`]. Because that mapping rounds rather than floors, cell
//! boundaries sit half a cell away from cell centers; the traversal shifts
//! into boundary-aligned space internally so both agree on which cell a
//! point belongs to.
//!
//! # Example
//!
//! ```
//! use waypath_spatial::{segment_cells, GridCoord, GridMapper};
//! use nalgebra::Point2;
//!
//! let mapper = GridMapper::new(1.0)?;
//! let cells = segment_cells(&Point2::new(0.0, 0.0), &Point2::new(3.0, 0.0), &mapper);
//! assert_eq!(cells.first(), Some(&GridCoord::new(0, 0)));
//! assert_eq!(cells.last(), Some(&GridCoord::new(3, 0)));
//! # Ok::<(), waypath_spatial::SpatialError>(())
//! ```

use nalgebra::{Point2, Vector2};

use crate::{GridCoord, GridMapper};

/// An iterator over the cells a ray passes through, in order.
///
/// Yields `(GridCoord, f64)` tuples where the second value is the
/// parametric distance at which the ray enters the cell, measured in units
/// of the (unnormalized) direction vector. The iterator is unbounded;
/// callers stop it with a parametric or count limit.
#[derive(Debug, Clone)]
pub struct CellTraversal {
    current: GridCoord,
    step: [i32; 2],
    t_max: [f64; 2],
    t_delta: [f64; 2],
    first: bool,
}

impl CellTraversal {
    /// Creates a traversal starting at the cell containing `origin`.
    #[must_use]
    pub fn new(origin: &Point2<f64>, direction: &Vector2<f64>, mapper: &GridMapper) -> Self {
        let resolution = mapper.resolution();

        // Shift by half a cell so the round-based lattice becomes
        // floor-based: cell c then spans [c*r, (c+1)*r) on each axis.
        let half = resolution / 2.0;
        let relative = [origin.x + half, origin.y + half];

        let current = mapper.world_to_grid(origin);

        let mut step = [0i32; 2];
        let mut t_max = [f64::INFINITY; 2];
        let mut t_delta = [f64::INFINITY; 2];

        let dir = [direction.x, direction.y];
        let coord = [current.x, current.y];

        for i in 0..2 {
            if dir[i].abs() > f64::EPSILON {
                step[i] = if dir[i] > 0.0 { 1 } else { -1 };
                t_delta[i] = (resolution / dir[i]).abs();

                // Distance to the next cell boundary in shifted space
                let boundary = if dir[i] > 0.0 {
                    (f64::from(coord[i]) + 1.0) * resolution
                } else {
                    f64::from(coord[i]) * resolution
                };
                t_max[i] = (boundary - relative[i]) / dir[i];
            }
        }

        Self {
            current,
            step,
            t_max,
            t_delta,
            first: true,
        }
    }
}

impl Iterator for CellTraversal {
    type Item = (GridCoord, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.first {
            self.first = false;
            return Some((self.current, 0.0));
        }

        let axis = usize::from(self.t_max[0] >= self.t_max[1]);
        let t = self.t_max[axis];

        match axis {
            0 => self.current.x = self.current.x.wrapping_add(self.step[0]),
            _ => self.current.y = self.current.y.wrapping_add(self.step[1]),
        }
        self.t_max[axis] += self.t_delta[axis];

        Some((self.current, t))
    }
}

/// Collects the cells a segment from `start` to `end` passes through,
/// in order and including both endpoint cells.
///
/// A degenerate segment yields only the cell containing `start`.
#[must_use]
pub fn segment_cells(
    start: &Point2<f64>,
    end: &Point2<f64>,
    mapper: &GridMapper,
) -> Vec<GridCoord> {
    let direction = end - start;
    let end_cell = mapper.world_to_grid(end);

    if direction.norm_squared() < f64::EPSILON {
        return vec![mapper.world_to_grid(start)];
    }

    // Parametric length 1.0 reaches `end`; the entry distance of the end
    // cell never exceeds it except through rounding, hence the final check.
    let mut cells: Vec<GridCoord> = CellTraversal::new(start, &direction, mapper)
        .take_while(|&(_, t)| t <= 1.0)
        .map(|(coord, _)| coord)
        .collect();

    if cells.last() != Some(&end_cell) {
        cells.push(end_cell);
    }

    cells
}
