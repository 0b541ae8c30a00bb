//! Waypoints and visiting roles.

use nalgebra::Point2;

/// The role a waypoint plays in the visiting order.
///
/// Roles establish a total order: the start comes first, ordinal stops
/// follow by index, and the end comes last.
///
/// # Example
///
/// ```
/// use waypath_types::WaypointRole;
///
/// assert!(WaypointRole::Start.rank() < WaypointRole::Ordinal(0).rank());
/// assert!(WaypointRole::Ordinal(3).rank() < WaypointRole::End.rank());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WaypointRole {
    /// The first position visited.
    Start,
    /// An intermediate stop, visited in ascending index order.
    Ordinal(u32),
    /// The last position visited.
    End,
}

impl WaypointRole {
    /// Returns the sort key for this role.
    ///
    /// Keys compare the way the visiting order does: start, then ordinals
    /// by ascending index, then end.
    #[must_use]
    pub const fn rank(self) -> (u8, u32) {
        match self {
            Self::Start => (0, 0),
            Self::Ordinal(index) => (1, index),
            Self::End => (2, 0),
        }
    }

    /// Returns `true` if this is an intermediate stop.
    #[must_use]
    pub const fn is_ordinal(self) -> bool {
        matches!(self, Self::Ordinal(_))
    }
}

/// A position to visit, tagged with its role in the visiting order.
///
/// # Example
///
/// ```
/// use waypath_types::{Waypoint, WaypointRole};
/// use nalgebra::Point2;
///
/// let stop = Waypoint::new(Point2::new(1.5, -2.0), WaypointRole::Ordinal(0));
/// assert_eq!(stop.position.x, 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    /// World-space position.
    pub position: Point2<f64>,
    /// Role in the visiting order.
    pub role: WaypointRole,
}

impl Waypoint {
    /// Creates a waypoint at the given position with the given role.
    #[must_use]
    pub const fn new(position: Point2<f64>, role: WaypointRole) -> Self {
        Self { position, role }
    }

    /// Creates the start waypoint.
    #[must_use]
    pub const fn start(position: Point2<f64>) -> Self {
        Self::new(position, WaypointRole::Start)
    }

    /// Creates an intermediate stop with the given ordinal index.
    #[must_use]
    pub const fn ordinal(position: Point2<f64>, index: u32) -> Self {
        Self::new(position, WaypointRole::Ordinal(index))
    }

    /// Creates the end waypoint.
    #[must_use]
    pub const fn end(position: Point2<f64>) -> Self {
        Self::new(position, WaypointRole::End)
    }
}

/// Sorts waypoints into visiting order: start, ordinals ascending, end.
///
/// The sort is stable, so waypoints sharing a role (several starts, or
/// duplicate ordinal indices) keep their relative input order.
///
/// # Example
///
/// ```
/// use waypath_types::{order_by_role, Waypoint, WaypointRole};
/// use nalgebra::Point2;
///
/// let mut stops = vec![
///     Waypoint::end(Point2::new(9.0, 0.0)),
///     Waypoint::ordinal(Point2::new(5.0, 0.0), 1),
///     Waypoint::start(Point2::new(0.0, 0.0)),
///     Waypoint::ordinal(Point2::new(3.0, 0.0), 0),
/// ];
/// order_by_role(&mut stops);
/// assert_eq!(stops[0].role, WaypointRole::Start);
/// assert_eq!(stops[1].role, WaypointRole::Ordinal(0));
/// assert_eq!(stops[3].role, WaypointRole::End);
/// ```
pub fn order_by_role(waypoints: &mut [Waypoint]) {
    waypoints.sort_by_key(|w| w.role.rank());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_order_start_ordinals_end() {
        assert!(WaypointRole::Start.rank() < WaypointRole::Ordinal(0).rank());
        assert!(WaypointRole::Ordinal(0).rank() < WaypointRole::Ordinal(1).rank());
        assert!(WaypointRole::Ordinal(u32::MAX).rank() < WaypointRole::End.rank());
    }

    #[test]
    fn order_by_role_sorts_into_visiting_order() {
        let mut stops = vec![
            Waypoint::ordinal(Point2::new(2.0, 0.0), 2),
            Waypoint::end(Point2::new(3.0, 0.0)),
            Waypoint::ordinal(Point2::new(1.0, 0.0), 0),
            Waypoint::start(Point2::new(0.0, 0.0)),
        ];
        order_by_role(&mut stops);
        let roles: Vec<_> = stops.iter().map(|w| w.role).collect();
        assert_eq!(
            roles,
            vec![
                WaypointRole::Start,
                WaypointRole::Ordinal(0),
                WaypointRole::Ordinal(2),
                WaypointRole::End,
            ]
        );
    }

    #[test]
    fn order_by_role_is_stable_for_duplicate_ranks() {
        let mut stops = vec![
            Waypoint::ordinal(Point2::new(1.0, 0.0), 5),
            Waypoint::ordinal(Point2::new(2.0, 0.0), 5),
        ];
        order_by_role(&mut stops);
        assert_eq!(stops[0].position.x, 1.0);
        assert_eq!(stops[1].position.x, 2.0);
    }

    #[test]
    fn helper_constructors_tag_roles() {
        assert_eq!(Waypoint::start(Point2::origin()).role, WaypointRole::Start);
        assert!(Waypoint::ordinal(Point2::origin(), 7).role.is_ordinal());
        assert_eq!(Waypoint::end(Point2::origin()).role, WaypointRole::End);
    }
}
