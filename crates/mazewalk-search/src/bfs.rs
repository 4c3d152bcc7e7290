use mazewalk_core::{CellKind, Grid, Point};

use crate::Solver;
use crate::algorithm::Algorithm;
use crate::error::SolveError;

impl Solver {
    /// Solve `grid` with a breadth-first search.
    ///
    /// Cells are marked [`Frontier`](CellKind::Frontier) when queued and
    /// [`Visited`](CellKind::Visited) when dequeued. On success the returned
    /// path (start to goal) is a shortest one in step count and every cell on
    /// it is marked [`Solution`](CellKind::Solution).
    pub fn solve_bfs(&mut self, grid: &mut Grid) -> Result<Vec<Point>, SolveError> {
        let label = Algorithm::Bfs.as_str();
        log::debug!("{label}: searching {} -> {}", grid.start(), grid.goal());

        self.begin(grid);
        self.queue.push_back(grid.start());

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(current) = self.queue.pop_front() {
            grid.set_kind(current, CellKind::Visited);
            if grid.is_goal(current) {
                found = true;
                break;
            }

            nbuf.clear();
            grid.neighbors(current, &mut nbuf);
            log::trace!("{label}: expand {current}, {} new", nbuf.len());

            for &np in nbuf.iter() {
                let Some(id) = grid.identity(np) else {
                    continue;
                };
                if !self.visited.insert(id) {
                    continue;
                }
                self.parents.insert(id, Some(current));
                self.queue.push_back(np);
                grid.set_kind(np, CellKind::Frontier);
            }
        }

        self.nbuf = nbuf;
        self.finish(grid, label, found)
    }
}
