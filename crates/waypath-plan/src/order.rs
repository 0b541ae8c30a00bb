//! Visiting-order policies.

use waypath_types::Waypoint;

/// Decides the order in which waypoints are visited.
///
/// The planner threads segments between consecutive waypoints of whatever
/// permutation the policy returns.
pub trait VisitOrder {
    /// Returns indices into `waypoints` in visiting order.
    fn arrange(&self, waypoints: &[Waypoint]) -> Vec<usize>;
}

/// Visits waypoints in the order the caller supplied them.
///
/// Reordering by role tag happens upstream via
/// [`waypath_types::order_by_role`]; combinatorial route optimization is
/// out of scope, so this identity permutation is the only shipped policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedVisitOrder;

impl VisitOrder for FixedVisitOrder {
    fn arrange(&self, waypoints: &[Waypoint]) -> Vec<usize> {
        (0..waypoints.len()).collect()
    }
}
