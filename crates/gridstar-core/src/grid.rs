//! The [`Grid`] type: a rectangle of [`Cell`]s with derived adjacency.
//!
//! A grid goes through two phases. While *building*, the caller marks
//! obstacles with [`Grid::set_obstacle`]. Then [`Grid::derive_neighbors`]
//! computes every cell's neighbor list once, and searches read those lists.
//! Changing an obstacle afterwards marks the adjacency stale until it is
//! derived again.

use std::fmt;

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::{Point, Range};

/// Neighbor offsets in scan order: the left column top to bottom, then the
/// cells directly above and below, then the right column top to bottom.
pub const SCAN_ORDER: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
];

const MAX_NEIGHBORS: usize = SCAN_ORDER.len();

/// A 2D grid of [`Cell`]s stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: Range,
    cells: Vec<Cell>,
    // Neighbor lists, MAX_NEIGHBORS slots per cell; `degree` holds how many
    // slots are in use.
    adjacency: Vec<Point>,
    degree: Vec<u8>,
    adjacency_built: bool,
}

impl Grid {
    /// Create a grid of `width` x `height` open cells.
    ///
    /// Neighbor lists start empty and adjacency is not built.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let bounds = Range::new(0, 0, width, height);
        let cells = bounds.iter().map(Cell::new).collect::<Vec<_>>();
        let len = cells.len();
        Ok(Self {
            bounds,
            cells,
            adjacency: vec![Point::ZERO; len * MAX_NEIGHBORS],
            degree: vec![0; len],
            adjacency_built: false,
        })
    }

    /// The bounding range `[0,width) x [0,height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point` (width, height).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width() as usize + p.x as usize)
    }

    /// Point at flat index `idx`. `idx` must be below [`len`](Self::len).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width() as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row-major iterator over the cells.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Whether `p` is inside the grid and flagged as an obstacle.
    #[inline]
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.cell(p).is_some_and(|c| c.obstacle)
    }

    /// Whether `p` is inside the grid and can be entered.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.cell(p).is_some_and(Cell::is_open)
    }

    /// Mark or unmark `p` as an obstacle.
    ///
    /// A change to the flag invalidates derived adjacency; re-setting the
    /// current value does not.
    pub fn set_obstacle(&mut self, p: Point, obstacle: bool) -> Result<(), GridError> {
        let i = self.index(p).ok_or(GridError::OutOfBounds {
            point: p,
            size: self.size(),
        })?;
        if self.cells[i].obstacle != obstacle {
            self.cells[i].obstacle = obstacle;
            self.adjacency_built = false;
        }
        Ok(())
    }

    /// Set the obstacle flag of every cell from a predicate.
    pub fn fill_obstacles(&mut self, mut f: impl FnMut(Point) -> bool) {
        for cell in self.cells.iter_mut() {
            cell.obstacle = f(cell.pos());
        }
        self.adjacency_built = false;
    }

    /// Make every cell open again.
    pub fn clear_obstacles(&mut self) {
        self.fill_obstacles(|_| false);
    }

    /// Number of cells flagged as obstacles.
    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|c| c.obstacle).count()
    }

    /// Whether neighbor lists reflect the current obstacle layout.
    #[inline]
    pub fn is_adjacency_built(&self) -> bool {
        self.adjacency_built
    }

    /// Compute the neighbor list of every cell.
    ///
    /// A neighbor is one of the eight surrounding cells that is inside the
    /// grid and not an obstacle. A diagonal neighbor is dropped when both
    /// orthogonal cells flanking it are obstacles, so paths never squeeze
    /// between two blocked corners. Lists follow [`SCAN_ORDER`].
    ///
    /// Running this again on an unchanged grid yields the same lists.
    pub fn derive_neighbors(&mut self) {
        let mut edges = 0usize;
        for i in 0..self.cells.len() {
            let p = self.cells[i].pos();
            let base = i * MAX_NEIGHBORS;
            let mut n = 0;
            for d in SCAN_ORDER {
                let q = p + d;
                if !self.is_open(q) || self.cuts_corner(p, d) {
                    continue;
                }
                self.adjacency[base + n] = q;
                n += 1;
            }
            // Unused slots must not keep lists from an earlier derivation.
            self.adjacency[base + n..base + MAX_NEIGHBORS].fill(Point::ZERO);
            self.degree[i] = n as u8;
            edges += n;
        }
        self.adjacency_built = true;
        log::debug!(
            "derived adjacency for {}x{} grid: {} obstacles, {} directed edges",
            self.width(),
            self.height(),
            self.obstacle_count(),
            edges
        );
    }

    // Diagonal step `d` from `p` passes between two obstacles.
    fn cuts_corner(&self, p: Point, d: Point) -> bool {
        d.x != 0
            && d.y != 0
            && self.is_obstacle(p.shift(d.x, 0))
            && self.is_obstacle(p.shift(0, d.y))
    }

    /// The derived neighbors of `p`, in scan order.
    ///
    /// Empty for points outside the grid and for every cell before the first
    /// [`derive_neighbors`](Self::derive_neighbors) call.
    pub fn neighbors(&self, p: Point) -> &[Point] {
        match self.index(p) {
            Some(i) => {
                let base = i * MAX_NEIGHBORS;
                &self.adjacency[base..base + self.degree[i] as usize]
            }
            None => &[],
        }
    }
}

impl fmt::Display for Grid {
    /// One line per row, `#` for obstacles and `.` for open cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width() {
                let ch = if self.is_obstacle(Point::new(x, y)) { '#' } else { '.' };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
