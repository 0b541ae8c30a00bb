//! Budget-bounded A* segment search with fallback tiers.
//!
//! The search contract is unusual: it never fails. A* runs first under an
//! iteration budget; if the budget runs out or the open set empties, a
//! greedy step-toward-target walker takes over; if even that cannot move,
//! the two-cell direct line is returned. Callers judge quality through
//! [`SegmentOutcome::tier`] and the iteration count, never through errors.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use waypath_spatial::GridCoord;
use waypath_types::{CellPath, SegmentTier};

use crate::walkability::Walkability;

const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// The result of one segment search: the cell path plus how it was won.
#[derive(Debug, Clone)]
pub struct SegmentOutcome {
    /// The cell path from start to end. Never empty, always ends at the
    /// requested end cell.
    pub path: CellPath,
    /// A* iterations spent before the path was produced.
    pub iterations: usize,
    /// The tier that produced the path.
    pub tier: SegmentTier,
}

/// Open-set entry. Ordering is reversed so the binary heap pops the node
/// with the lowest f-score first.
#[derive(Debug, Clone)]
struct SearchNode {
    coord: GridCoord,
    f_score: f64,
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for SearchNode {}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_score
            .partial_cmp(&self.f_score)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Manhattan distance between cells, as the A* heuristic.
///
/// Chosen over Euclidean deliberately: overestimating diagonal shortcuts
/// biases the search toward axis-aligned routes, which keeps paths from
/// cutting diagonally across narrow obstacle gaps.
fn heuristic(a: GridCoord, b: GridCoord) -> f64 {
    f64::from(a.manhattan_distance(b))
}

/// Euclidean cost of one move between 8-connected neighbor cells.
fn move_cost(from: GridCoord, to: GridCoord) -> f64 {
    if from.x != to.x && from.y != to.y {
        SQRT_2
    } else {
        1.0
    }
}

/// Per-segment A* search over the 8-connected grid.
///
/// Holds no per-run state; every [`SegmentSearch::find`] call allocates
/// fresh score maps and discards them when the segment is done.
pub struct SegmentSearch<'a> {
    walkability: &'a Walkability<'a>,
    max_iterations: usize,
}

impl<'a> SegmentSearch<'a> {
    /// Creates a search over the given walkability adapter with the given
    /// iteration budget.
    #[must_use]
    pub const fn new(walkability: &'a Walkability<'a>, max_iterations: usize) -> Self {
        Self {
            walkability,
            max_iterations,
        }
    }

    /// Finds a cell path from `start` to `end`.
    ///
    /// Always returns a non-empty path terminating at `end`; the tier in
    /// the outcome records which stage produced it.
    #[must_use]
    pub fn find(&self, start: GridCoord, end: GridCoord) -> SegmentOutcome {
        if start == end {
            return SegmentOutcome {
                path: CellPath::from_single(start),
                iterations: 0,
                tier: SegmentTier::Search,
            };
        }

        let (searched, iterations) = self.astar(start, end);
        if let Some(path) = searched {
            return SegmentOutcome {
                path,
                iterations,
                tier: SegmentTier::Search,
            };
        }

        tracing::warn!(
            ?start,
            ?end,
            iterations,
            "search budget exhausted, falling back to greedy walk"
        );
        if let Some(path) = self.greedy_walk(start, end) {
            return SegmentOutcome {
                path,
                iterations,
                tier: SegmentTier::GreedyWalk,
            };
        }

        tracing::warn!(?start, ?end, "greedy walk stuck at start, using direct line");
        SegmentOutcome {
            path: CellPath::new(vec![start, end]),
            iterations,
            tier: SegmentTier::DirectLine,
        }
    }

    /// Classic A*: binary-heap frontier, per-run score maps, iteration
    /// budget. Returns the path and the iterations spent, or `None` with
    /// the spent count when the budget or the open set ran out.
    fn astar(&self, start: GridCoord, end: GridCoord) -> (Option<CellPath>, usize) {
        let mut open_set = BinaryHeap::new();
        let mut g_score: HashMap<GridCoord, f64> = HashMap::new();
        let mut came_from: HashMap<GridCoord, GridCoord> = HashMap::new();
        let mut closed_set: HashSet<GridCoord> = HashSet::new();

        g_score.insert(start, 0.0);
        open_set.push(SearchNode {
            coord: start,
            f_score: heuristic(start, end),
        });

        let mut iterations = 0usize;

        while let Some(node) = open_set.pop() {
            if iterations >= self.max_iterations {
                return (None, iterations);
            }
            iterations += 1;

            let current = node.coord;

            if current == end {
                return (Some(reconstruct(&came_from, current)), iterations);
            }

            // Stale heap entries for already-expanded cells are skipped.
            if !closed_set.insert(current) {
                continue;
            }

            let current_g = g_score.get(&current).copied().unwrap_or(f64::MAX);

            for neighbor in current.all_neighbors() {
                if closed_set.contains(&neighbor) || !self.walkability.is_walkable(neighbor) {
                    continue;
                }

                let tentative = current_g + move_cost(current, neighbor);
                let best = g_score.get(&neighbor).copied().unwrap_or(f64::MAX);
                if tentative < best {
                    came_from.insert(neighbor, current);
                    g_score.insert(neighbor, tentative);
                    open_set.push(SearchNode {
                        coord: neighbor,
                        f_score: tentative + heuristic(neighbor, end),
                    });
                }
            }
        }

        (None, iterations)
    }

    /// Greedy step-toward-target walker, the first fallback tier.
    ///
    /// From the start cell, repeatedly try the diagonal step toward the
    /// target, then its axis components, then any cardinal, then whichever
    /// single step closes the remaining distance. Stops on reaching the
    /// end, exhausting the step budget, or having nowhere to go; an
    /// unreached end cell is appended so the path still terminates there.
    ///
    /// Returns `None` only when not even one step was possible.
    fn greedy_walk(&self, start: GridCoord, end: GridCoord) -> Option<CellPath> {
        let mut path = CellPath::from_single(start);
        let mut current = start;

        let (dx, dy) = start.direction_to(end);
        let max_steps = start.manhattan_distance(end) as usize + 10;
        let mut steps = 0usize;

        while current != end && steps < max_steps {
            steps += 1;

            let next = current.stepped(dx, dy);
            if self.walkability.is_walkable(next) {
                current = next;
                path.push(current);
                continue;
            }

            let alternatives = [
                (dx, 0),
                (0, dy),
                (1, 0),
                (-1, 0),
                (0, 1),
                (0, -1),
            ];
            if let Some(&(ax, ay)) = alternatives
                .iter()
                .filter(|&&(ax, ay)| (ax, ay) != (0, 0))
                .find(|&&(ax, ay)| self.walkability.is_walkable(current.stepped(ax, ay)))
            {
                current = current.stepped(ax, ay);
                path.push(current);
                continue;
            }

            // Last resort: the step that still closes in on the target.
            let (cx, cy) = current.direction_to(end);
            let closer = current.stepped(cx, cy);
            if self.walkability.is_walkable(closer) {
                current = closer;
                path.push(current);
            } else {
                break;
            }
        }

        if path.len() == 1 && current != end {
            return None;
        }

        if current != end {
            path.push(end);
        }
        Some(path)
    }
}

/// Walks the back-links from the goal to the start.
fn reconstruct(came_from: &HashMap<GridCoord, GridCoord>, mut current: GridCoord) -> CellPath {
    let mut cells = vec![current];
    while let Some(&prev) = came_from.get(&current) {
        current = prev;
        cells.push(current);
    }
    cells.reverse();
    CellPath::new(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use waypath_spatial::{GridMapper, GridObstacles, ObstacleField};

    fn obstacles_at(cells: &[(i32, i32)]) -> GridObstacles {
        let mut obstacles = GridObstacles::new(1.0).unwrap();
        for &(x, y) in cells {
            obstacles.insert(GridCoord::new(x, y));
        }
        obstacles
    }

    fn path_cost(path: &CellPath) -> f64 {
        path.segments().map(|(a, b)| move_cost(*a, *b)).sum()
    }

    // Runs one search against the given obstacle cells. A small clearance
    // keeps neighboring cells walkable so tests can reason per cell.
    fn search(
        cells: &[(i32, i32)],
        budget: usize,
        start: (i32, i32),
        end: (i32, i32),
    ) -> SegmentOutcome {
        let obstacles = obstacles_at(cells);
        let fields: [&dyn ObstacleField; 1] = [&obstacles];
        let walkability = Walkability::new(GridMapper::new(1.0).unwrap(), 0.3, &fields);
        let searcher = SegmentSearch::new(&walkability, budget);
        searcher.find(GridCoord::new(start.0, start.1), GridCoord::new(end.0, end.1))
    }

    // ==================== A* Tests ====================

    #[test]
    fn trivial_segment_is_single_cell() {
        let outcome = search(&[], 100, (3, 3), (3, 3));
        assert_eq!(outcome.path.cells(), &[GridCoord::new(3, 3)]);
        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.tier, SegmentTier::Search);
    }

    #[test]
    fn straight_line_in_open_field() {
        let outcome = search(&[], 1_000, (0, 0), (5, 0));
        assert_eq!(outcome.tier, SegmentTier::Search);
        assert_eq!(outcome.path.first(), Some(&GridCoord::new(0, 0)));
        assert_eq!(outcome.path.last(), Some(&GridCoord::new(5, 0)));
        assert_eq!(outcome.path.len(), 6);
        assert_relative_eq!(path_cost(&outcome.path), 5.0);
    }

    #[test]
    fn diagonal_moves_cost_sqrt_two() {
        let outcome = search(&[], 1_000, (0, 0), (3, 3));
        assert_eq!(outcome.tier, SegmentTier::Search);
        // Optimal cost is three diagonal steps.
        assert_relative_eq!(path_cost(&outcome.path), 3.0 * SQRT_2, epsilon = 1e-9);
    }

    #[test]
    fn path_routes_around_wall() {
        // Vertical wall at x=2 with a gap at y=3.
        let wall: Vec<(i32, i32)> = (-3..=5).filter(|&y| y != 3).map(|y| (2, y)).collect();
        let outcome = search(&wall, 10_000, (0, 0), (4, 0));
        assert_eq!(outcome.tier, SegmentTier::Search);
        assert_eq!(outcome.path.last(), Some(&GridCoord::new(4, 0)));
        // Must pass through the gap.
        assert!(outcome.path.iter().any(|c| c.x == 2 && c.y == 3));
        // And never through the wall.
        for cell in outcome.path.iter() {
            assert!(!wall.contains(&(cell.x, cell.y)));
        }
    }

    #[test]
    fn consecutive_search_cells_are_adjacent() {
        let outcome = search(&[(1, 1), (2, 0)], 10_000, (0, 0), (5, 2));
        assert_eq!(outcome.tier, SegmentTier::Search);
        for (a, b) in outcome.path.segments() {
            assert_eq!(a.chebyshev_distance(*b), 1);
        }
    }

    #[test]
    fn search_is_deterministic() {
        let wall: Vec<(i32, i32)> = (-2..=4).map(|y| (3, y)).collect();
        let first = search(&wall, 10_000, (0, 0), (6, 0));
        let second = search(&wall, 10_000, (0, 0), (6, 0));
        assert_eq!(first.path, second.path);
        assert_eq!(first.iterations, second.iterations);
    }

    // ==================== Fallback Tests ====================

    #[test]
    fn exhausted_budget_falls_back_to_greedy() {
        let outcome = search(&[], 2, (0, 0), (10, 10));
        assert_eq!(outcome.tier, SegmentTier::GreedyWalk);
        assert_eq!(outcome.path.first(), Some(&GridCoord::new(0, 0)));
        assert_eq!(outcome.path.last(), Some(&GridCoord::new(10, 10)));
    }

    #[test]
    fn greedy_walk_reaches_diagonal_target_in_open_field() {
        let outcome = search(&[], 1, (0, 0), (4, 4));
        assert_eq!(outcome.tier, SegmentTier::GreedyWalk);
        assert_eq!(outcome.path.len(), 5);
        for (a, b) in outcome.path.segments() {
            assert_eq!(a.chebyshev_distance(*b), 1);
        }
        assert_eq!(outcome.path.last(), Some(&GridCoord::new(4, 4)));
    }

    #[test]
    fn enclosed_target_still_terminates_at_end() {
        // End cell boxed in on all 8 sides.
        let ring: Vec<(i32, i32)> = vec![
            (9, -1), (10, -1), (11, -1),
            (9, 0), (11, 0),
            (9, 1), (10, 1), (11, 1),
        ];
        let outcome = search(&ring, 500, (0, 0), (10, 0));
        assert!(outcome.tier.is_fallback());
        assert_eq!(outcome.path.first(), Some(&GridCoord::new(0, 0)));
        assert_eq!(outcome.path.last(), Some(&GridCoord::new(10, 0)));
        assert!(!outcome.path.is_empty());
    }

    #[test]
    fn enclosed_start_uses_direct_line() {
        // Start boxed in on all 8 sides; the greedy walker cannot move.
        let ring: Vec<(i32, i32)> = vec![
            (-1, -1), (0, -1), (1, -1),
            (-1, 0), (1, 0),
            (-1, 1), (0, 1), (1, 1),
        ];
        let outcome = search(&ring, 500, (0, 0), (10, 0));
        assert_eq!(outcome.tier, SegmentTier::DirectLine);
        assert_eq!(
            outcome.path.cells(),
            &[GridCoord::new(0, 0), GridCoord::new(10, 0)]
        );
    }

    #[test]
    fn iterations_never_exceed_budget() {
        let ring: Vec<(i32, i32)> = vec![
            (9, -1), (10, -1), (11, -1),
            (9, 0), (11, 0),
            (9, 1), (10, 1), (11, 1),
        ];
        let outcome = search(&ring, 300, (0, 0), (10, 0));
        assert!(outcome.iterations <= 300);
    }
}
