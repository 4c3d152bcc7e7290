use mazewalk_core::{CellKind, Grid, Point};

use crate::Solver;
use crate::algorithm::Algorithm;
use crate::error::SolveError;

impl Solver {
    /// Solve `grid` with an iterative depth-first walk.
    ///
    /// At every step only the *first* open neighbor (in
    /// [`Direction::ORDER`](mazewalk_core::Direction::ORDER)) is followed; the
    /// current cell goes on the backtracking stack and the walk advances. A
    /// dead end pops the stack, and the popped cell's neighbors are looked at
    /// again against the grid as it is now.
    ///
    /// The result depends on the neighbor order and is not necessarily a
    /// shortest path. On perfect mazes the walk never leaves the solution
    /// corridor more than the dead ends force it to.
    pub fn solve_dfs(&mut self, grid: &mut Grid) -> Result<Vec<Point>, SolveError> {
        let label = Algorithm::Dfs.as_str();
        log::debug!("{label}: searching {} -> {}", grid.start(), grid.goal());

        self.begin(grid);
        let mut current = grid.start();
        grid.set_kind(current, CellKind::Visited);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            grid.set_kind(current, CellKind::Visited);
            if grid.is_goal(current) {
                break 'search true;
            }

            nbuf.clear();
            grid.neighbors(current, &mut nbuf);
            let next = nbuf
                .first()
                .and_then(|&np| grid.identity(np).map(|id| (np, id)));

            match next {
                Some((np, id)) if !self.visited.contains(&id) => {
                    log::trace!("{label}: advance {current} -> {np}");
                    self.visited.insert(id);
                    grid.set_kind(np, CellKind::Frontier);
                    self.stack.push(current);
                    self.parents.insert(id, Some(current));
                    current = np;
                }
                _ => match self.stack.pop() {
                    Some(prev) => {
                        log::trace!("{label}: dead end at {current}, back to {prev}");
                        current = prev;
                    }
                    None => break 'search false,
                },
            }
        };

        self.nbuf = nbuf;
        self.finish(grid, label, found)
    }
}
