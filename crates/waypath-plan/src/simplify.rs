//! Corner-preserving path simplification.

use waypath_types::CellPath;

/// Reduces a cell path to its endpoints and direction-change corners.
///
/// Interior cells are kept only where the incoming and outgoing step
/// directions differ. Directions are clamped per axis to `{-1, 0, 1}`, so
/// long moves left by fallback tiers compare by heading rather than by
/// raw offset, and the pass is idempotent: simplifying a corner path
/// returns it unchanged.
///
/// # Example
///
/// ```
/// use waypath_plan::corner_cells;
/// use waypath_spatial::GridCoord;
/// use waypath_types::CellPath;
///
/// let path = CellPath::new(vec![
///     GridCoord::new(0, 0),
///     GridCoord::new(1, 0),
///     GridCoord::new(2, 0),
///     GridCoord::new(2, 1),
///     GridCoord::new(2, 2),
/// ]);
/// let corners = corner_cells(&path);
/// assert_eq!(corners.len(), 3);
/// assert_eq!(corners.get(1), Some(&GridCoord::new(2, 0)));
/// ```
#[must_use]
pub fn corner_cells(path: &CellPath) -> CellPath {
    let cells = path.cells();

    if cells.len() <= 2 {
        return path.clone();
    }

    let mut result = Vec::with_capacity(cells.len());
    result.push(cells[0]);

    for window in cells.windows(3) {
        let incoming = window[0].direction_to(window[1]);
        let outgoing = window[1].direction_to(window[2]);
        if incoming != outgoing {
            result.push(window[1]);
        }
    }

    result.push(cells[cells.len() - 1]);

    CellPath::new(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypath_spatial::GridCoord;

    fn path_of(cells: &[(i32, i32)]) -> CellPath {
        cells.iter().map(|&(x, y)| GridCoord::new(x, y)).collect()
    }

    #[test]
    fn straight_line_keeps_only_endpoints() {
        let simplified = corner_cells(&path_of(&[(0, 0), (1, 0), (2, 0), (3, 0)]));
        assert_eq!(simplified.cells(), &[GridCoord::new(0, 0), GridCoord::new(3, 0)]);
    }

    #[test]
    fn diagonal_line_keeps_only_endpoints() {
        let simplified = corner_cells(&path_of(&[(0, 0), (1, 1), (2, 2), (3, 3)]));
        assert_eq!(simplified.len(), 2);
    }

    #[test]
    fn l_shape_keeps_the_corner() {
        let simplified = corner_cells(&path_of(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]));
        assert_eq!(
            simplified.cells(),
            &[GridCoord::new(0, 0), GridCoord::new(2, 0), GridCoord::new(2, 2)]
        );
    }

    #[test]
    fn zigzag_keeps_every_turn() {
        let simplified = corner_cells(&path_of(&[(0, 0), (1, 1), (2, 0), (3, 1)]));
        assert_eq!(simplified.len(), 4);
    }

    #[test]
    fn long_jump_compares_by_heading() {
        // A fallback tier can leave a jump of several cells; the clamped
        // direction makes it collinear with unit steps on the same heading.
        let simplified = corner_cells(&path_of(&[(0, 0), (1, 0), (5, 0), (6, 0)]));
        assert_eq!(simplified.cells(), &[GridCoord::new(0, 0), GridCoord::new(6, 0)]);
    }

    #[test]
    fn simplification_is_idempotent() {
        let once = corner_cells(&path_of(&[(0, 0), (1, 0), (2, 0), (2, 1), (3, 2), (4, 3)]));
        let twice = corner_cells(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn short_paths_pass_through() {
        let empty = corner_cells(&CellPath::default());
        assert!(empty.is_empty());

        let single = corner_cells(&path_of(&[(4, 4)]));
        assert_eq!(single.len(), 1);

        let pair = corner_cells(&path_of(&[(0, 0), (0, 1)]));
        assert_eq!(pair.len(), 2);
    }

    #[test]
    fn duplicate_endpoint_cells_are_kept() {
        // Direction to a duplicate cell is (0, 0), which differs from the
        // surrounding headings, so the duplicate counts as a corner.
        let simplified = corner_cells(&path_of(&[(0, 0), (1, 0), (1, 0), (2, 0)]));
        assert_eq!(simplified.len(), 4);
    }
}
