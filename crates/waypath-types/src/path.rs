//! Path containers in grid and world space.

use nalgebra::Point2;
use waypath_spatial::GridCoord;

/// An ordered sequence of grid cells forming a path.
///
/// Consecutive cells are normally 8-connected, but the container does not
/// enforce connectivity: fallback search tiers may produce jumps, and those
/// paths are still valid values here.
///
/// # Example
///
/// ```
/// use waypath_types::CellPath;
/// use waypath_spatial::GridCoord;
///
/// let path = CellPath::new(vec![
///     GridCoord::new(0, 0),
///     GridCoord::new(1, 0),
///     GridCoord::new(2, 1),
/// ]);
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.first(), Some(&GridCoord::new(0, 0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPath {
    cells: Vec<GridCoord>,
}

impl CellPath {
    /// Creates a path from a sequence of cells.
    #[must_use]
    pub fn new(cells: Vec<GridCoord>) -> Self {
        Self { cells }
    }

    /// Creates a path containing a single cell.
    #[must_use]
    pub fn from_single(cell: GridCoord) -> Self {
        Self { cells: vec![cell] }
    }

    /// Number of cells in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the path contains no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cells as a slice.
    #[must_use]
    pub fn cells(&self) -> &[GridCoord] {
        &self.cells
    }

    /// Returns the first cell, if any.
    #[must_use]
    pub fn first(&self) -> Option<&GridCoord> {
        self.cells.first()
    }

    /// Returns the last cell, if any.
    #[must_use]
    pub fn last(&self) -> Option<&GridCoord> {
        self.cells.last()
    }

    /// Returns the cell at the given index, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GridCoord> {
        self.cells.get(index)
    }

    /// Iterates over the cells in order.
    pub fn iter(&self) -> impl Iterator<Item = &GridCoord> {
        self.cells.iter()
    }

    /// Iterates over consecutive cell pairs.
    pub fn segments(&self) -> impl Iterator<Item = (&GridCoord, &GridCoord)> {
        self.cells.iter().zip(self.cells.iter().skip(1))
    }

    /// Appends a cell to the end of the path.
    pub fn push(&mut self, cell: GridCoord) {
        self.cells.push(cell);
    }

    /// Appends another path, dropping the junction cell when `other`
    /// starts where this path ends.
    ///
    /// # Example
    ///
    /// ```
    /// use waypath_types::CellPath;
    /// use waypath_spatial::GridCoord;
    ///
    /// let mut a = CellPath::new(vec![GridCoord::new(0, 0), GridCoord::new(1, 0)]);
    /// let b = CellPath::new(vec![GridCoord::new(1, 0), GridCoord::new(2, 0)]);
    /// a.append(&b);
    /// assert_eq!(a.len(), 3);
    /// ```
    pub fn append(&mut self, other: &Self) {
        let skip = usize::from(self.last().is_some() && self.last() == other.first());
        self.cells.extend(other.cells.iter().skip(skip).copied());
    }

    /// Consumes the path and returns the underlying cells.
    #[must_use]
    pub fn into_cells(self) -> Vec<GridCoord> {
        self.cells
    }
}

impl FromIterator<GridCoord> for CellPath {
    fn from_iter<I: IntoIterator<Item = GridCoord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for CellPath {
    type Item = GridCoord;
    type IntoIter = std::vec::IntoIter<GridCoord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a CellPath {
    type Item = &'a GridCoord;
    type IntoIter = std::slice::Iter<'a, GridCoord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// An ordered sequence of world-space points with a cached total length.
///
/// This is the planner's final output form: smoothed sample points in
/// world coordinates.
///
/// # Example
///
/// ```
/// use waypath_types::WorldPath;
/// use nalgebra::Point2;
///
/// let path = WorldPath::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(3.0, 4.0),
/// ]);
/// assert!((path.length() - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPath {
    points: Vec<Point2<f64>>,
    length: f64,
}

impl WorldPath {
    /// Creates a path from a sequence of points.
    #[must_use]
    pub fn new(points: Vec<Point2<f64>>) -> Self {
        let length = points
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).norm())
            .sum();
        Self { points, length }
    }

    /// Number of points in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the path contains no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total polyline length in world units.
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Returns the points as a slice.
    #[must_use]
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    /// Returns the first point, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Point2<f64>> {
        self.points.first()
    }

    /// Returns the last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Point2<f64>> {
        self.points.last()
    }

    /// Returns the point at the given index, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point2<f64>> {
        self.points.get(index)
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> impl Iterator<Item = &Point2<f64>> {
        self.points.iter()
    }

    /// Iterates over consecutive point pairs.
    pub fn segments(&self) -> impl Iterator<Item = (&Point2<f64>, &Point2<f64>)> {
        self.points.iter().zip(self.points.iter().skip(1))
    }

    /// Appends a point, extending the cached length.
    pub fn push(&mut self, point: Point2<f64>) {
        if let Some(last) = self.points.last() {
            self.length += (point - last).norm();
        }
        self.points.push(point);
    }

    /// Appends another path, dropping the junction point when `other`
    /// starts exactly where this path ends.
    ///
    /// Junction points are compared bitwise: segments produced from the
    /// same waypoint share the same coordinates, so no tolerance is used.
    pub fn append(&mut self, other: &Self) {
        let skip = usize::from(self.last().is_some() && self.last() == other.first());
        for point in other.points.iter().skip(skip) {
            self.push(*point);
        }
    }

    /// Consumes the path and returns the underlying points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2<f64>> {
        self.points
    }
}

impl FromIterator<Point2<f64>> for WorldPath {
    fn from_iter<I: IntoIterator<Item = Point2<f64>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for WorldPath {
    type Item = Point2<f64>;
    type IntoIter = std::vec::IntoIter<Point2<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
