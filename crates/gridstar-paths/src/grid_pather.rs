use gridstar_core::{Grid, Point};

use crate::distance::{Heuristic, distance_between};
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Adapts a [`Grid`] with derived adjacency to the pather traits.
///
/// Neighbors come from the grid's precomputed lists, step costs from
/// [`distance_between`] and estimates from the chosen [`Heuristic`].
#[derive(Clone, Copy)]
pub struct GridPather<'a> {
    grid: &'a Grid,
    heuristic: Heuristic,
}

impl<'a> GridPather<'a> {
    pub fn new(grid: &'a Grid, heuristic: Heuristic) -> Self {
        Self { grid, heuristic }
    }

    #[inline]
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend_from_slice(self.grid.neighbors(p));
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, from: Point, to: Point) -> i32 {
        distance_between(from, to)
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        self.heuristic.estimate(from, to)
    }
}
