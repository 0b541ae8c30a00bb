//! Collision-aware Catmull-Rom smoothing.
//!
//! Corner paths come out of the simplifier as sharp polylines. This module
//! threads a centripetal-free (uniform) Catmull-Rom spline through the
//! corner points and samples it densely, while testing every new sample
//! against the obstacle fields: a sample whose approach segment would cut
//! through an obstacle is pulled back toward the previous accepted point
//! by bisection. The emitted curve therefore never visibly clips a corner
//! even though the underlying spline mathematically might.

use nalgebra::Point2;
use waypath_types::{CellPath, WorldPath};

use crate::walkability::Walkability;

/// Bisection steps when a sample's approach segment is blocked.
const BISECTION_STEPS: usize = 5;

/// Minimum samples per corner segment, regardless of smoothing factor.
const MIN_SAMPLES_PER_SEGMENT: usize = 6;

/// Samples per corner segment at smoothing factor 1.0.
const MAX_SAMPLES_PER_SEGMENT: f64 = 12.0;

/// Evaluates the uniform Catmull-Rom spline for one segment.
///
/// The curve interpolates `p1` at `t = 0` and `p2` at `t = 1`; `p0` and
/// `p3` shape the tangents.
fn catmull_rom(
    p0: Point2<f64>,
    p1: Point2<f64>,
    p2: Point2<f64>,
    p3: Point2<f64>,
    t: f64,
) -> Point2<f64> {
    let t2 = t * t;
    let t3 = t2 * t;
    let coords = 0.5
        * (2.0 * p1.coords
            + (p2.coords - p0.coords) * t
            + (2.0 * p0.coords - 5.0 * p1.coords + 4.0 * p2.coords - p3.coords) * t2
            + (-p0.coords + 3.0 * p1.coords - 3.0 * p2.coords + p3.coords) * t3);
    Point2::from(coords)
}

/// Catmull-Rom smoother over a walkability adapter.
///
/// # Example
///
/// ```
/// use waypath_plan::{SplineSmoother, Walkability};
/// use waypath_spatial::{GridCoord, GridMapper, ObstacleField};
/// use waypath_types::CellPath;
///
/// let mapper = GridMapper::new(1.0)?;
/// let fields: [&dyn ObstacleField; 0] = [];
/// let walkability = Walkability::new(mapper, 0.6, &fields);
///
/// let smoother = SplineSmoother::new(&walkability, 0.5);
/// let corners = CellPath::new(vec![
///     GridCoord::new(0, 0),
///     GridCoord::new(3, 0),
///     GridCoord::new(3, 3),
/// ]);
/// let smoothed = smoother.smooth(&corners);
/// assert!(smoothed.len() > corners.len());
/// # Ok::<(), waypath_spatial::SpatialError>(())
/// ```
pub struct SplineSmoother<'a> {
    walkability: &'a Walkability<'a>,
    samples_per_segment: usize,
}

impl<'a> SplineSmoother<'a> {
    /// Creates a smoother with sample density derived from the smoothing
    /// factor: `max(6, round(12 * factor))` samples per corner segment.
    #[must_use]
    pub fn new(walkability: &'a Walkability<'a>, smoothing_factor: f64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let scaled = (MAX_SAMPLES_PER_SEGMENT * smoothing_factor).round() as usize;
        Self {
            walkability,
            samples_per_segment: scaled.max(MIN_SAMPLES_PER_SEGMENT),
        }
    }

    /// Returns the sample count per corner segment.
    #[must_use]
    pub const fn samples_per_segment(&self) -> usize {
        self.samples_per_segment
    }

    /// Smooths a corner path into a densely sampled world-space curve.
    ///
    /// Paths of two or fewer corners pass through unchanged (as their
    /// cell-center points): there is no bend to round. Otherwise the
    /// output starts at the first corner and ends at (or, when blocked,
    /// just short of) the last.
    #[must_use]
    pub fn smooth(&self, corners: &CellPath) -> WorldPath {
        let mapper = self.walkability.mapper();
        let ctrl: Vec<Point2<f64>> = corners.iter().map(|&c| mapper.grid_to_world(c)).collect();

        if ctrl.len() <= 2 {
            return WorldPath::new(ctrl);
        }

        let mut sampled = Vec::with_capacity(1 + (ctrl.len() - 1) * self.samples_per_segment);
        sampled.push(ctrl[0]);

        for i in 0..ctrl.len() - 1 {
            // Phantom neighbors at the ends: clamp to the segment's own
            // endpoints so the curve still interpolates them.
            let p0 = if i == 0 { ctrl[i] } else { ctrl[i - 1] };
            let p1 = ctrl[i];
            let p2 = ctrl[i + 1];
            let p3 = if i + 2 < ctrl.len() { ctrl[i + 2] } else { ctrl[i + 1] };

            for s in 1..=self.samples_per_segment {
                #[allow(clippy::cast_precision_loss)]
                let t = s as f64 / self.samples_per_segment as f64;
                let q = catmull_rom(p0, p1, p2, p3, t);

                let prev = sampled[sampled.len() - 1];
                if self.walkability.line_blocked(&prev, &q) {
                    sampled.push(self.backoff(prev, q));
                } else {
                    sampled.push(q);
                }
            }
        }

        WorldPath::new(sampled)
    }

    /// Bisects from a blocked sample back toward the previous accepted
    /// point, returning the furthest unblocked candidate found within the
    /// step budget.
    fn backoff(&self, prev: Point2<f64>, blocked: Point2<f64>) -> Point2<f64> {
        let mut lo = prev;
        let mut hi = blocked;
        for _ in 0..BISECTION_STEPS {
            let mid = nalgebra::center(&lo, &hi);
            if self.walkability.line_blocked(&prev, &mid) {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        lo
    }
}
