use gridstar_core::Point;

use crate::Pathfinder;
use crate::path::Path;
use crate::pathfinder::{NodeRef, SearchStats, UNREACHABLE};
use crate::traits::AstarPather;

impl Pathfinder {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// The open cell with the lowest `f` is expanded first; among equal `f`
    /// the cell discovered earliest wins. Cells are closed at most once and
    /// never reopened. Returns the full path (both endpoints included, start
    /// first) or `None` if no path exists within the current range.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Path> {
        self.stats = SearchStats::default();
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            self.stats.discovered = 1;
            return Some(Path::from_points(vec![from]));
        }

        let cur_gen = self.next_generation();

        // Initialise the start node.
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = pather.estimate(from, to);
            node.parent = usize::MAX;
            node.seq = 0;
            node.generation = cur_gen;
            node.closed = false;
        }
        let mut seq: u32 = 1;
        self.stats.discovered = 1;

        self.open.clear();
        self.open.push(NodeRef {
            idx: start_idx,
            f: self.nodes[start_idx].f,
            seq: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip entries superseded by a cheaper update or already closed.
            let cn = &self.nodes[ci];
            if cn.closed || cn.f != current.f {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].closed = true;
            self.stats.expanded += 1;
            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);
            log::trace!("expand {current_point} g={current_g} f={}", current.f);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let n = &mut self.nodes[ni];
                let discovered = n.generation == cur_gen;
                if discovered && n.closed {
                    continue;
                }
                let tentative_g = current_g + pather.cost(current_point, np);

                if !discovered {
                    // First discovery: always recorded.
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                    n.seq = seq;
                    n.closed = false;
                    seq = seq.wrapping_add(1);
                    self.stats.discovered += 1;
                } else if tentative_g >= n.g {
                    continue;
                }

                n.g = tentative_g;
                n.f = tentative_g + pather.estimate(np, to);
                n.parent = ci;

                self.open.push(NodeRef {
                    idx: ni,
                    f: n.f,
                    seq: n.seq,
                });
            }
        };

        self.nbuf = nbuf;
        self.open.clear();

        if !found {
            log::debug!(
                "no path {from} -> {to} ({} expanded, {} discovered)",
                self.stats.expanded,
                self.stats.discovered
            );
            return None;
        }

        // Walk predecessors from the goal, then present start first.
        let mut points = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            points.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        points.reverse();

        let cost = self.nodes[goal_idx].g;
        log::debug!(
            "path {from} -> {to}: {} cells, cost {cost} ({} expanded, {} discovered)",
            points.len(),
            self.stats.expanded,
            self.stats.discovered
        );
        Some(Path::with_cost(points, cost))
    }
}
