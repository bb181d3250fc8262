//! The [`Cell`] type: one addressable grid position.

use crate::geom::Point;

/// A single grid position and its obstacle status.
///
/// Search scores are not stored here. They belong to the run that computes
/// them, so a cell stays valid across any number of searches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Point,
    pub obstacle: bool,
}

impl Cell {
    /// Create an open cell at `pos`.
    #[inline]
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            obstacle: false,
        }
    }

    /// Set the obstacle flag (builder).
    #[inline]
    pub const fn with_obstacle(mut self, obstacle: bool) -> Self {
        self.obstacle = obstacle;
        self
    }

    /// Position of the cell. Fixed at creation.
    #[inline]
    pub const fn pos(self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn x(self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub const fn y(self) -> i32 {
        self.pos.y
    }

    /// Whether the cell can be entered.
    #[inline]
    pub const fn is_open(self) -> bool {
        !self.obstacle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_open() {
        let c = Cell::new(Point::new(4, 2));
        assert_eq!(c.pos(), Point::new(4, 2));
        assert_eq!((c.x(), c.y()), (4, 2));
        assert!(c.is_open());
        assert!(!c.with_obstacle(true).is_open());
    }

    #[test]
    fn identity_is_position_and_flag() {
        let a = Cell::new(Point::new(1, 1));
        let b = Cell::new(Point::new(1, 1));
        assert_eq!(a, b);
        assert_ne!(a, Cell::new(Point::new(1, 2)));
    }
}
