//! Maze-solving searches over a [`mazewalk_core::Grid`].
//!
//! Every search runs through a [`Solver`], which owns the frontier
//! containers, visited set and parent map and reuses them from one run to
//! the next. A run relabels the grid in place: discovered cells become
//! `Frontier`, expanded cells `Visited`, and on success the cells of the
//! returned path `Solution`. [`cell_counts`] summarises the result.
//!
//! - **BFS** shortest path ([`Solver::solve_bfs`])
//! - **DFS** first-neighbor walk with backtracking ([`Solver::solve_dfs`])
//! - **Priority search** ([`Solver::solve_priority`]) with a pluggable
//!   [`Heuristic`]: [`Dijkstra`] or [`Manhattan`] (A*)
//!
//! [`Algorithm`] names the four strategies for callers that pick one at run
//! time.

mod algorithm;
mod bfs;
mod counts;
mod dfs;
mod distance;
mod error;
mod priority;
mod solver;
mod traits;

#[cfg(test)]
mod fixtures;

pub use algorithm::Algorithm;
pub use counts::{CellCounts, cell_counts};
pub use distance::{Dijkstra, Manhattan};
pub use error::{ParseAlgorithmError, SolveError};
pub use priority::STEP_COST;
pub use solver::Solver;
pub use traits::Heuristic;
