//! A* shortest-path search over gridstar grids.
//!
//! [`Pathfinder`] owns the per-run scratch storage (scores, predecessors and
//! the open queue), so the [`Grid`](gridstar_core::Grid) being searched is
//! only borrowed for reading and any number of searches can run against it.
//!
//! ```
//! use gridstar_core::{Grid, Point};
//! use gridstar_paths::Pathfinder;
//!
//! let mut grid = Grid::new(5, 5).unwrap();
//! grid.set_obstacle(Point::new(2, 2), true).unwrap();
//! grid.derive_neighbors();
//!
//! let mut pf = Pathfinder::for_grid(&grid);
//! let path = pf.search(&grid, Point::new(0, 0), Point::new(4, 4)).unwrap();
//! assert_eq!(path.start(), Some(Point::new(0, 0)));
//! assert_eq!(path.goal(), Some(Point::new(4, 4)));
//! assert!(!path.contains(Point::new(2, 2)));
//! ```
//!
//! # Cost model
//!
//! Orthogonal steps cost [`STRAIGHT_COST`] (10) and diagonal steps
//! [`DIAGONAL_COST`] (14). The default [`Heuristic::Manhattan`] estimate is
//! fast but may overestimate with diagonal moves; [`Heuristic::Octile`]
//! guarantees optimal paths.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | remaining-cost estimate |
//!
//! [`GridPather`] implements all three for a grid.

mod astar;
mod distance;
mod error;
mod grid_pather;
mod path;
mod pathfinder;
mod traits;

pub use distance::{
    DIAGONAL_COST, Heuristic, STRAIGHT_COST, chebyshev, distance_between, heuristic, manhattan,
    octile,
};
pub use error::SearchError;
pub use grid_pather::GridPather;
pub use path::Path;
pub use pathfinder::{Pathfinder, SearchConfig, SearchStats, UNREACHABLE, find_path};
pub use traits::{AstarPather, Pather, WeightedPather};
