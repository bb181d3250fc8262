use gridstar_core::Point;

use crate::distance::distance_between;

/// A search result: cells from start to goal inclusive, with total cost.
///
/// An empty path means the goal could not be reached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "PathPoints"))]
pub struct Path {
    points: Vec<Point>,
    cost: i32,
}

impl Path {
    /// Build a path from points in start-to-goal order. Consecutive points
    /// must be adjacent; the cost is the sum of their step costs.
    pub fn from_points(points: Vec<Point>) -> Self {
        let cost = points
            .windows(2)
            .map(|w| distance_between(w[0], w[1]))
            .sum();
        Self { points, cost }
    }

    /// Build a path whose cost was accumulated by the search.
    pub(crate) fn with_cost(points: Vec<Point>, cost: i32) -> Self {
        Self { points, cost }
    }

    /// The "no path" result.
    #[inline]
    pub fn unreachable() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Number of moves (one less than the number of cells).
    #[inline]
    pub fn steps(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Number of diagonal moves.
    pub fn diagonal_steps(&self) -> usize {
        self.points
            .windows(2)
            .filter(|w| !w[0].is_aligned_with(w[1]))
            .count()
    }

    /// Total cost of walking the path.
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Cells in start-to-goal order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Whether the path visits `p`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    /// Cells in start-to-goal order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Point>> {
        self.points.iter().copied()
    }

    /// Cells in goal-to-start order, as walked back through predecessors.
    pub fn goal_first(&self) -> std::iter::Rev<std::iter::Copied<std::slice::Iter<'_, Point>>> {
        self.iter().rev()
    }
}

// Deserialized paths recompute their cost from the points.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PathPoints {
    points: Vec<Point>,
}

#[cfg(feature = "serde")]
impl From<PathPoints> for Path {
    fn from(p: PathPoints) -> Self {
        Self::from_points(p.points)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = Point;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Point>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Path> for Vec<Point> {
    fn from(p: Path) -> Self {
        p.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_sums_steps() {
        let p = Path::from_points(vec![
            Point::new(0, 0),
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(2, 2),
        ]);
        assert_eq!(p.cost(), 34);
        assert_eq!(p.len(), 4);
        assert_eq!(p.steps(), 3);
        assert_eq!(p.diagonal_steps(), 1);
        assert_eq!(p.start(), Some(Point::new(0, 0)));
        assert_eq!(p.goal(), Some(Point::new(2, 2)));
    }

    #[test]
    fn unreachable_is_empty() {
        let p = Path::unreachable();
        assert!(p.is_empty());
        assert_eq!(p.cost(), 0);
        assert_eq!(p.steps(), 0);
        assert_eq!(p.start(), None);
    }

    #[test]
    fn single_cell_costs_nothing() {
        let p = Path::from_points(vec![Point::new(3, 3)]);
        assert_eq!(p.len(), 1);
        assert_eq!(p.cost(), 0);
    }

    #[test]
    fn goal_first_reverses() {
        let p = Path::from_points(vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 2)]);
        let back: Vec<_> = p.goal_first().collect();
        assert_eq!(back, vec![Point::new(1, 2), Point::new(0, 1), Point::new(0, 0)]);
        let fwd: Vec<_> = (&p).into_iter().collect();
        assert_eq!(fwd, p.points());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let p = Path::from_points(vec![Point::new(0, 0), Point::new(1, 1)]);
        let json = serde_json::to_string(&p).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn deserialized_cost_follows_points() {
        let json = r#"{"points":[{"x":0,"y":0},{"x":1,"y":1},{"x":1,"y":2}],"cost":999}"#;
        let p: Path = serde_json::from_str(json).unwrap();
        assert_eq!(p.cost(), 24);
        assert_eq!(p.len(), 3);
    }
}
