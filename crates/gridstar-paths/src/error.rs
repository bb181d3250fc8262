//! Error types for search misuse.
//!
//! An unreachable goal is not an error: it is an empty [`Path`](crate::Path).

use gridstar_core::Point;
use thiserror::Error;

/// Caller contract violations detected before a search starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Obstacles changed (or were never finalized) since the last
    /// `derive_neighbors` call.
    #[error("grid adjacency not built: call derive_neighbors after setting obstacles")]
    AdjacencyNotBuilt,
    /// Start or goal lies outside the grid.
    #[error("point {point} is out of bounds")]
    OutOfBounds { point: Point },
}
