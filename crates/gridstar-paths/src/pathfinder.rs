use std::collections::BinaryHeap;

use gridstar_core::{Grid, Point, Range};

use crate::distance::Heuristic;
use crate::error::SearchError;
use crate::grid_pather::GridPather;
use crate::path::Path;

/// Sentinel score for cells not yet reached in the current run.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Internal node for the A* search
// ---------------------------------------------------------------------------

/// Run-local search state of one cell. Only meaningful when `generation`
/// matches the pathfinder's current generation; otherwise the cell has not
/// been discovered in this run.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    // Order of first discovery, used to break f ties.
    pub(crate) seq: u32,
    pub(crate) generation: u32,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            f: UNREACHABLE,
            parent: usize::MAX,
            seq: 0,
            generation: 0,
            closed: false,
        }
    }
}

/// Open-set entry ordered so that `BinaryHeap` pops the lowest `f` first,
/// and among equal `f` the cell discovered earliest.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) seq: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Configuration and statistics
// ---------------------------------------------------------------------------

/// Tunables for [`Pathfinder::search`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub heuristic: Heuristic,
}

impl SearchConfig {
    /// Set the heuristic (builder).
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }
}

/// Counters from the most recent search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells moved to the closed set.
    pub expanded: usize,
    /// Cells added to the open set, start included.
    pub discovered: usize,
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// A* engine owning all per-run scratch storage.
///
/// Scores, predecessors and the open queue live here rather than on grid
/// cells, so a [`Grid`] is only borrowed for reading. Scratch is reused across
/// runs: bumping a generation counter invalidates every node at once, and no
/// allocation happens after the first search on a given grid size.
pub struct Pathfinder {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) config: SearchConfig,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) stats: SearchStats,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl Pathfinder {
    /// Create a pathfinder for the given rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            config: SearchConfig::default(),
            nodes: vec![Node::default(); rng.len()],
            generation: 0,
            open: BinaryHeap::new(),
            stats: SearchStats::default(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Create a pathfinder sized for `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.bounds())
    }

    /// Replace the configuration (builder).
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    #[inline]
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// The rectangle searches are confined to.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Counters from the most recent search.
    #[inline]
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Replace the underlying rectangle.
    ///
    /// Scratch storage is kept when the new rectangle fits in it and only
    /// grown otherwise.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        if new_len <= self.nodes.len() {
            self.next_generation();
            return;
        }
        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// Find a path on `grid` from `start` to `goal` with the configured
    /// heuristic.
    ///
    /// Returns an empty [`Path`] when the goal is unreachable. Fails if the
    /// grid's adjacency is stale or either endpoint is off the grid.
    pub fn search(&mut self, grid: &Grid, start: Point, goal: Point) -> Result<Path, SearchError> {
        if !grid.is_adjacency_built() {
            return Err(SearchError::AdjacencyNotBuilt);
        }
        for point in [start, goal] {
            if !grid.contains(point) {
                return Err(SearchError::OutOfBounds { point });
            }
        }
        if self.rng != grid.bounds() {
            self.set_range(grid.bounds());
        }
        let pather = GridPather::new(grid, self.config.heuristic);
        Ok(self.astar_path(&pather, start, goal).unwrap_or_default())
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Start a new run, lazily invalidating every node.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale nodes could alias the new generation.
            for n in self.nodes.iter_mut() {
                *n = Node::default();
            }
            self.generation = 1;
        }
        self.generation
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

/// Search `grid` once with a throwaway [`Pathfinder`] and default settings.
pub fn find_path(grid: &Grid, start: Point, goal: Point) -> Result<Path, SearchError> {
    Pathfinder::for_grid(grid).search(grid, start, goal)
}
