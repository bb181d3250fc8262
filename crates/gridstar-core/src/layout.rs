//! Text map layouts.
//!
//! A [`Layout`] turns ASCII art into a [`Grid`] plus optional start and goal
//! markers, and draws a path back onto the same text form:
//!
//! ```text
//! S..#....
//! .#.#.##.
//! .#...#.G
//! ```
//!
//! `#` is an obstacle, `.` an open cell, `S` the start and `G` the goal.

use std::fmt;

use crate::error::LayoutError;
use crate::geom::Point;
use crate::grid::Grid;

pub const OBSTACLE: char = '#';
pub const OPEN: char = '.';
pub const START: char = 'S';
pub const GOAL: char = 'G';
pub const PATH: char = '*';

/// A grid with optional start and goal markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    grid: Grid,
    start: Option<Point>,
    goal: Option<Point>,
}

impl Layout {
    /// Parse a layout from text.
    ///
    /// Blank lines around the map are ignored; every other line must have
    /// the same width. The returned grid has its adjacency derived.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let lines: Vec<&str> = text.lines().collect();
        let first = lines.iter().position(|l| !l.trim().is_empty());
        let last = lines.iter().rposition(|l| !l.trim().is_empty());
        let (Some(first), Some(last)) = (first, last) else {
            return Err(LayoutError::Empty);
        };
        let rows = &lines[first..=last];

        let width = rows[0].chars().count();
        for (line, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LayoutError::InconsistentWidth {
                    line: line + 1,
                    expected: width,
                    found,
                });
            }
        }

        let mut grid = Grid::new(width as i32, rows.len() as i32)?;
        let mut start = None;
        let mut goal = None;
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                match ch {
                    OPEN => {}
                    OBSTACLE => grid.set_obstacle(pos, true)?,
                    START => place_marker(&mut start, START, pos)?,
                    GOAL => place_marker(&mut goal, GOAL, pos)?,
                    _ => return Err(LayoutError::InvalidChar { ch, pos }),
                }
            }
        }
        grid.derive_neighbors();
        log::debug!(
            "parsed {}x{} layout, start {:?}, goal {:?}",
            grid.width(),
            grid.height(),
            start,
            goal
        );
        Ok(Self { grid, start, goal })
    }

    /// Wrap an existing grid. Adjacency is derived if it is stale.
    pub fn from_grid(mut grid: Grid, start: Option<Point>, goal: Option<Point>) -> Self {
        if !grid.is_adjacency_built() {
            grid.derive_neighbors();
        }
        Self { grid, start, goal }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Draw the layout with `path` overlaid.
    ///
    /// Path cells are drawn as `*` except where a start or goal marker sits.
    pub fn render(&self, path: &[Point]) -> String {
        let w = self.grid.width() as usize;
        let mut rows: Vec<Vec<char>> = (0..self.grid.height())
            .map(|y| {
                (0..self.grid.width())
                    .map(|x| {
                        if self.grid.is_obstacle(Point::new(x, y)) {
                            OBSTACLE
                        } else {
                            OPEN
                        }
                    })
                    .collect()
            })
            .collect();
        for &p in path {
            if self.grid.contains(p) {
                rows[p.y as usize][p.x as usize] = PATH;
            }
        }
        for (marker, ch) in [(self.start, START), (self.goal, GOAL)] {
            if let Some(p) = marker.filter(|&p| self.grid.contains(p)) {
                rows[p.y as usize][p.x as usize] = ch;
            }
        }
        let mut out = String::with_capacity(rows.len() * (w + 1));
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter());
        }
        out
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}

fn place_marker(slot: &mut Option<Point>, marker: char, pos: Point) -> Result<(), LayoutError> {
    if let Some(first) = *slot {
        return Err(LayoutError::DuplicateMarker {
            marker,
            first,
            second: pos,
        });
    }
    *slot = Some(pos);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "
S..#
.#.#
...G
";

    #[test]
    fn parse_map() {
        let l = Layout::parse(MAP).unwrap();
        assert_eq!(l.grid().size(), Point::new(4, 3));
        assert_eq!(l.start(), Some(Point::new(0, 0)));
        assert_eq!(l.goal(), Some(Point::new(3, 2)));
        assert_eq!(l.grid().obstacle_count(), 3);
        assert!(l.grid().is_obstacle(Point::new(1, 1)));
        assert!(l.grid().is_open(Point::new(3, 2)));
        assert!(l.grid().is_adjacency_built());
    }

    #[test]
    fn markers_are_optional() {
        let l = Layout::parse("..\n.#").unwrap();
        assert_eq!(l.start(), None);
        assert_eq!(l.goal(), None);
    }

    #[test]
    fn render_round_trips_markers() {
        let l = Layout::parse(MAP).unwrap();
        assert_eq!(l.to_string(), MAP.trim());
    }

    #[test]
    fn render_overlays_path() {
        let l = Layout::parse(MAP).unwrap();
        let path = [
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(1, 2),
            Point::new(2, 2),
            Point::new(3, 2),
        ];
        assert_eq!(l.render(&path), "S..#\n*#.#\n.**G");
    }

    #[test]
    fn empty_layout() {
        assert_eq!(Layout::parse(""), Err(LayoutError::Empty));
        assert_eq!(Layout::parse("\n  \n"), Err(LayoutError::Empty));
    }

    #[test]
    fn inconsistent_width() {
        assert_eq!(
            Layout::parse("...\n..\n..."),
            Err(LayoutError::InconsistentWidth {
                line: 2,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn invalid_char() {
        assert_eq!(
            Layout::parse("..\n.x"),
            Err(LayoutError::InvalidChar {
                ch: 'x',
                pos: Point::new(1, 1)
            })
        );
    }

    #[test]
    fn duplicate_marker() {
        assert_eq!(
            Layout::parse("S.S"),
            Err(LayoutError::DuplicateMarker {
                marker: 'S',
                first: Point::new(0, 0),
                second: Point::new(2, 0)
            })
        );
    }

    #[test]
    fn from_grid_derives_adjacency() {
        let mut g = Grid::new(2, 2).unwrap();
        g.set_obstacle(Point::new(1, 0), true).unwrap();
        let l = Layout::from_grid(g, Some(Point::ZERO), None);
        assert!(l.grid().is_adjacency_built());
        assert_eq!(l.to_string(), "S#\n..");
    }

    #[test]
    fn layout_equality_ignores_derivation_history() {
        let mut g = Grid::new(2, 2).unwrap();
        g.derive_neighbors();
        g.set_obstacle(Point::new(1, 0), true).unwrap();
        let l = Layout::from_grid(g, Some(Point::ZERO), None);
        assert_eq!(l, Layout::parse("S#\n..").unwrap());
    }
}
