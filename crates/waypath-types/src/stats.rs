//! Statistics reported alongside planned paths.
//!
//! Segment search never fails outright; when the budget runs out it falls
//! back to cheaper tiers. These types record which tier produced each
//! segment and how much work the search did, so callers can judge path
//! quality without the planner turning degradation into an error.

use waypath_spatial::GridCoord;

/// The tier of the search pipeline that produced a segment.
///
/// Tiers are ordered from best to worst: a later tier means the earlier
/// ones gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentTier {
    /// Full A* search reached the goal within budget.
    Search,
    /// The greedy obstacle-sliding walker produced the segment.
    GreedyWalk,
    /// Start and end only, obstacles ignored.
    DirectLine,
}

impl SegmentTier {
    /// Returns `true` if the segment came from a fallback tier.
    #[must_use]
    pub const fn is_fallback(self) -> bool {
        !matches!(self, Self::Search)
    }
}

/// Statistics for one waypoint-pair segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentStats {
    /// Start cell of the segment.
    pub start: GridCoord,
    /// End cell of the segment.
    pub end: GridCoord,
    /// A* iterations spent before the segment was produced.
    pub iterations: usize,
    /// Which tier produced the segment.
    pub tier: SegmentTier,
    /// Number of cells in the segment's raw grid path.
    pub cell_count: usize,
}

/// Statistics for a full multi-waypoint plan.
///
/// # Example
///
/// ```
/// use waypath_types::{PlanStats, SegmentStats, SegmentTier};
/// use waypath_spatial::GridCoord;
///
/// let mut stats = PlanStats::default();
/// stats.record(SegmentStats {
///     start: GridCoord::new(0, 0),
///     end: GridCoord::new(5, 0),
///     iterations: 42,
///     tier: SegmentTier::Search,
///     cell_count: 6,
/// });
/// assert_eq!(stats.total_iterations(), 42);
/// assert!(!stats.any_fallback());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanStats {
    segments: Vec<SegmentStats>,
}

impl PlanStats {
    /// Creates empty statistics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Records the statistics for one segment.
    pub fn record(&mut self, segment: SegmentStats) {
        self.segments.push(segment);
    }

    /// Per-segment statistics in planning order.
    #[must_use]
    pub fn segments(&self) -> &[SegmentStats] {
        &self.segments
    }

    /// Number of segments planned.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Total A* iterations across all segments.
    #[must_use]
    pub fn total_iterations(&self) -> usize {
        self.segments.iter().map(|s| s.iterations).sum()
    }

    /// The worst tier any segment fell back to, if any segment exists.
    #[must_use]
    pub fn worst_tier(&self) -> Option<SegmentTier> {
        self.segments.iter().map(|s| s.tier).max()
    }

    /// Returns `true` if any segment came from a fallback tier.
    #[must_use]
    pub fn any_fallback(&self) -> bool {
        self.segments.iter().any(|s| s.tier.is_fallback())
    }
}
