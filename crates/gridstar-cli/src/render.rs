use crossterm::style::Stylize;
use gridstar_core::layout::{GOAL, OBSTACLE, PATH, START};
use gridstar_core::{Layout, Point};
use gridstar_paths::Path;
use serde::Serialize;

/// Draws solved layouts as text, optionally with terminal colors.
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// The layout with the path overlaid, one line per row.
    pub fn draw(&self, layout: &Layout, path: &Path) -> String {
        let text = layout.render(path.points());
        if !self.color {
            return text;
        }
        let mut out = String::with_capacity(text.len() * 4);
        for ch in text.chars() {
            let styled = match ch {
                OBSTACLE => ch.dark_grey().to_string(),
                PATH => ch.yellow().bold().to_string(),
                START => ch.green().bold().to_string(),
                GOAL => ch.red().bold().to_string(),
                _ => ch.to_string(),
            };
            out.push_str(&styled);
        }
        out
    }

    /// Summary lines printed under the map.
    pub fn summary(&self, path: &Path) -> String {
        if path.is_empty() {
            return "no path".to_string();
        }
        format!("cost: {}\nsteps: {}", path.cost(), path.steps())
    }

    /// One coordinate per line, in the requested order.
    pub fn points(&self, path: &Path, goal_first: bool) -> String {
        let pts: Vec<String> = if goal_first {
            path.goal_first().map(|p| p.to_string()).collect()
        } else {
            path.iter().map(|p| p.to_string()).collect()
        };
        pts.join("\n")
    }
}

/// Machine-readable search result.
#[derive(Serialize)]
pub struct Report {
    pub found: bool,
    pub cost: i32,
    pub steps: usize,
    pub start: Point,
    pub goal: Point,
    pub points: Vec<Point>,
}

impl Report {
    pub fn new(start: Point, goal: Point, path: &Path, goal_first: bool) -> Self {
        let mut points = path.points().to_vec();
        if goal_first {
            points.reverse();
        }
        Self {
            found: !path.is_empty(),
            cost: path.cost(),
            steps: path.steps(),
            start,
            goal,
            points,
        }
    }
}
