//! Algorithm selection.

use std::fmt;
use std::str::FromStr;

use mazewalk_core::{Grid, Point};

use crate::Solver;
use crate::distance::{Dijkstra, Manhattan};
use crate::error::{ParseAlgorithmError, SolveError};

/// The search strategies a [`Solver`] can run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    /// Lower-case name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        }
    }

    /// Whether a successful run is guaranteed to return a shortest path.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

impl Solver {
    /// Solve `grid` with the chosen algorithm.
    pub fn solve(
        &mut self,
        grid: &mut Grid,
        algorithm: Algorithm,
    ) -> Result<Vec<Point>, SolveError> {
        match algorithm {
            Algorithm::Bfs => self.solve_bfs(grid),
            Algorithm::Dfs => self.solve_dfs(grid),
            Algorithm::Dijkstra => self.solve_priority(grid, &Dijkstra),
            Algorithm::AStar => self.solve_priority(grid, &Manhattan),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn algorithm_round_trip() {
        let json = serde_json::to_string(&Algorithm::AStar).unwrap();
        assert_eq!(json, r#""astar""#);
        let back: Algorithm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Algorithm::AStar);
    }
}
