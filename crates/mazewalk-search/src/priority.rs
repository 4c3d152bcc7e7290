use mazewalk_core::{CellKind, Grid, Point};

use crate::Solver;
use crate::error::SolveError;
use crate::traits::Heuristic;

/// Cost of moving between two adjacent cells.
pub const STEP_COST: u32 = 1;

impl Solver {
    /// Solve `grid` with a best-first search ordered by cell priority.
    ///
    /// A cell's priority is the number of steps taken to reach it plus
    /// `heuristic`'s estimate of the steps left, and is written to
    /// [`Cell::priority`](mazewalk_core::Cell::priority). With
    /// [`Dijkstra`](crate::Dijkstra) this is Dijkstra's algorithm, with
    /// [`Manhattan`](crate::Manhattan) it is A*.
    ///
    /// Unlike BFS, a cell already on the frontier can be reached again more
    /// cheaply, so candidates are every walkable neighbor that has not been
    /// expanded yet.
    pub fn solve_priority<H: Heuristic>(
        &mut self,
        grid: &mut Grid,
        heuristic: &H,
    ) -> Result<Vec<Point>, SolveError> {
        let label = heuristic.name();
        let (start, goal) = (grid.start(), grid.goal());
        log::debug!("{label}: searching {start} -> {goal}");

        self.begin(grid);
        if let Some(id) = grid.identity(start) {
            self.costs.insert(id, 0);
        }
        let f = f64::from(heuristic.estimate(start, goal));
        grid.set_priority(start, f);
        grid.set_kind(start, CellKind::Frontier);
        self.push_open(start, f);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search false;
            };
            let Some(cell) = grid.cell(current.pos) else {
                continue;
            };

            // Skip stale entries.
            if cell.kind == CellKind::Visited || current.priority > cell.priority {
                continue;
            }
            let Some(&current_g) = self.costs.get(&cell.identity()) else {
                continue;
            };

            grid.set_kind(current.pos, CellKind::Visited);
            if grid.is_goal(current.pos) {
                break 'search true;
            }

            nbuf.clear();
            grid.walkable_neighbors(current.pos, &mut nbuf);
            log::trace!(
                "{label}: expand {} at {}, g = {current_g}",
                current.pos,
                current.priority
            );

            for &np in nbuf.iter() {
                let Some(n) = grid.cell(np) else {
                    continue;
                };
                if n.kind == CellKind::Visited {
                    continue;
                }
                let id = n.identity();
                let tentative = current_g + STEP_COST;
                if self.costs.get(&id).is_some_and(|&g| tentative >= g) {
                    continue;
                }

                self.costs.insert(id, tentative);
                self.parents.insert(id, Some(current.pos));

                let f = f64::from(tentative.saturating_add(heuristic.estimate(np, goal)));
                grid.set_priority(np, f);
                grid.set_kind(np, CellKind::Frontier);
                self.push_open(np, f);
            }
        };

        self.nbuf = nbuf;
        self.finish(grid, label, found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counts::CellCounts;
    use crate::distance::{Dijkstra, Manhattan};
    use crate::fixtures;

    #[test]
    fn dijkstra_on_perfect_maze() {
        let mut grid = Grid::parse(fixtures::PERFECT).unwrap();
        let path = Solver::new().solve_priority(&mut grid, &Dijkstra).unwrap();
        assert_eq!(path, fixtures::perfect_path());
        assert_eq!(CellCounts::of(&grid).solution, 11);
    }

    #[test]
    fn both_heuristics_find_shortest_path_round_a_loop() {
        let mut solver = Solver::new();
        let mut a = Grid::parse(fixtures::LOOP).unwrap();
        let mut b = a.clone();
        let by_dijkstra = solver.solve_priority(&mut a, &Dijkstra).unwrap();
        let by_astar = solver.solve_priority(&mut b, &Manhattan).unwrap();
        assert_eq!(by_dijkstra.len(), fixtures::LOOP_SHORTEST);
        assert_eq!(by_astar, by_dijkstra);
    }

    #[test]
    fn priorities_written_to_cells() {
        let mut grid = Grid::parse(fixtures::LOOP).unwrap();
        Solver::new().solve_priority(&mut grid, &Dijkstra).unwrap();
        let start = grid.cell(grid.start()).unwrap();
        assert_eq!(start.priority, 0.0);
        let goal = grid.cell(grid.goal()).unwrap();
        assert_eq!(goal.priority, (fixtures::LOOP_SHORTEST - 1) as f64);
        assert!(grid.cell(Point::new(0, 0)).unwrap().priority.is_infinite());

        let mut grid = Grid::parse(fixtures::LOOP).unwrap();
        Solver::new().solve_priority(&mut grid, &Manhattan).unwrap();
        // on a shortest path g + h stays at the start's estimate
        let start_f = grid.cell(grid.start()).unwrap().priority;
        assert_eq!(start_f, 12.0);
        assert_eq!(grid.cell(grid.goal()).unwrap().priority, start_f);
    }

    fn assert_no_solution<H: Heuristic>(heuristic: &H) {
        let mut grid = Grid::parse(fixtures::DISCONNECTED).unwrap();
        let err = Solver::new()
            .solve_priority(&mut grid, heuristic)
            .unwrap_err();
        assert!(matches!(err, SolveError::NoSolution { .. }));
        let counts = CellCounts::of(&grid);
        assert_eq!(counts.solution, 0);
        assert_eq!(counts.visited, 6);
        assert_eq!(counts.frontier, 0);
    }

    #[test]
    fn disconnected_maze_has_no_solution() {
        assert_no_solution(&Dijkstra);
        assert_no_solution(&Manhattan);
    }

    #[test]
    fn start_is_goal() {
        let p = Point::new(2, 2);
        let mut grid = Grid::with_endpoints(fixtures::ROOM, p, p).unwrap();
        let path = Solver::new().solve_priority(&mut grid, &Manhattan).unwrap();
        assert_eq!(path, vec![p]);
        assert_eq!(CellCounts::of(&grid).solution, 1);
    }

    #[test]
    fn costs_track_every_reached_cell() {
        let mut grid = Grid::parse(fixtures::PERFECT).unwrap();
        let mut solver = Solver::new();
        solver.solve_priority(&mut grid, &Dijkstra).unwrap();
        // only the start seeded by `begin`
        assert_eq!(solver.visited.len(), 1);
        let goal = grid.identity(grid.goal()).unwrap();
        assert_eq!(solver.costs.get(&goal), Some(&10));
        let reached = CellCounts::of(&grid);
        assert_eq!(
            solver.costs.len(),
            reached.solution + reached.visited + reached.frontier
        );
    }

    #[test]
    fn astar_expands_no_more_than_dijkstra_in_open_room() {
        let mut a = Grid::parse(fixtures::ROOM).unwrap();
        let mut b = a.clone();
        let mut solver = Solver::new();
        let pa = solver.solve_priority(&mut a, &Dijkstra).unwrap();
        let pb = solver.solve_priority(&mut b, &Manhattan).unwrap();
        assert_eq!(pa.len(), pb.len());
        assert!(CellCounts::of(&b).visited <= CellCounts::of(&a).visited);
    }
}
