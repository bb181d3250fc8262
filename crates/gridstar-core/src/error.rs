//! Error types for grid construction and map parsing.

use thiserror::Error;

use crate::geom::Point;

/// Errors raised by [`Grid`](crate::Grid) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is not strictly positive.
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i32, height: i32 },
    /// A coordinate lies outside the grid.
    #[error("point {point} is out of bounds for a {}x{} grid", size.x, size.y)]
    OutOfBounds { point: Point, size: Point },
}

/// Errors raised while parsing a text [`Layout`](crate::Layout).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,
    /// A line does not match the width of the first line.
    #[error("line {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the layout alphabet.
    #[error("invalid character {ch:?} at {pos}")]
    InvalidChar { ch: char, pos: Point },
    /// A start or goal marker appears more than once.
    #[error("marker {marker:?} appears twice, at {first} and {second}")]
    DuplicateMarker {
        marker: char,
        first: Point,
        second: Point,
    },
    #[error(transparent)]
    Grid(#[from] GridError),
}
