//! Step costs and distance estimates.
//!
//! Costs are integers scaled by ten: an orthogonal step costs
//! [`STRAIGHT_COST`] and a diagonal step [`DIAGONAL_COST`], which
//! approximates `10 * sqrt(2)`.

use gridstar_core::Point;

/// Cost of a horizontal or vertical step.
pub const STRAIGHT_COST: i32 = 10;

/// Cost of a diagonal step.
pub const DIAGONAL_COST: i32 = 14;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Cost of the cheapest 8-way walk from `a` to `b` on an open grid.
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    STRAIGHT_COST * dx.max(dy) + (DIAGONAL_COST - STRAIGHT_COST) * dx.min(dy)
}

/// Cost of a single step between adjacent cells `a` and `b`.
///
/// Only meaningful for neighbors: any pair that shares neither a row nor a
/// column is priced as a diagonal step.
#[inline]
pub fn distance_between(a: Point, b: Point) -> i32 {
    if a.is_aligned_with(b) {
        STRAIGHT_COST
    } else {
        DIAGONAL_COST
    }
}

/// Default remaining-cost estimate: Manhattan distance in straight steps.
///
/// This can overestimate when diagonal moves are available, so it does not
/// guarantee optimal paths. [`Heuristic::Octile`] does.
#[inline]
pub fn heuristic(a: Point, b: Point) -> i32 {
    STRAIGHT_COST * manhattan(a, b)
}

/// Choice of remaining-cost estimate for a search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heuristic {
    /// [`heuristic`]: scaled Manhattan distance.
    #[default]
    Manhattan,
    /// [`octile`]: exact on open grids, never overestimates.
    Octile,
    /// Always zero: the search degrades to uniform-cost (Dijkstra) order.
    Zero,
}

impl Heuristic {
    /// Estimate the cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> i32 {
        match self {
            Self::Manhattan => heuristic(from, to),
            Self::Octile => octile(from, to),
            Self::Zero => 0,
        }
    }

    /// Whether the estimate never exceeds the true 10/14 path cost.
    #[inline]
    pub fn is_admissible(self) -> bool {
        !matches!(self, Self::Manhattan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_costs() {
        let p = Point::new(3, 3);
        assert_eq!(distance_between(p, Point::new(3, 4)), 10);
        assert_eq!(distance_between(p, Point::new(2, 3)), 10);
        assert_eq!(distance_between(p, Point::new(4, 4)), 14);
        assert_eq!(distance_between(p, Point::new(2, 4)), 14);
    }

    #[test]
    fn manhattan_heuristic_is_scaled() {
        assert_eq!(heuristic(Point::new(0, 0), Point::new(4, 4)), 80);
        assert_eq!(heuristic(Point::new(2, 5), Point::new(0, 1)), 60);
        assert_eq!(heuristic(Point::new(1, 1), Point::new(1, 1)), 0);
    }

    #[test]
    fn octile_matches_cheapest_walk() {
        assert_eq!(octile(Point::new(0, 0), Point::new(4, 4)), 56);
        assert_eq!(octile(Point::new(0, 0), Point::new(3, 0)), 30);
        assert_eq!(octile(Point::new(0, 0), Point::new(5, 2)), 58);
        assert_eq!(octile(Point::new(5, 2), Point::new(0, 0)), 58);
    }

    #[test]
    fn plain_distances() {
        let a = Point::new(1, 2);
        let b = Point::new(4, 0);
        assert_eq!(manhattan(a, b), 5);
        assert_eq!(chebyshev(a, b), 3);
    }

    #[test]
    fn heuristic_choice() {
        let a = Point::new(0, 0);
        let b = Point::new(2, 1);
        assert_eq!(Heuristic::default(), Heuristic::Manhattan);
        assert_eq!(Heuristic::Manhattan.estimate(a, b), 30);
        assert_eq!(Heuristic::Octile.estimate(a, b), 24);
        assert_eq!(Heuristic::Zero.estimate(a, b), 0);
        assert!(!Heuristic::Manhattan.is_admissible());
        assert!(Heuristic::Octile.is_admissible());
    }
}
