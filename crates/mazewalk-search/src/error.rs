use mazewalk_core::Point;

/// Why a search run ended without a path.
///
/// The grid keeps whatever `Visited`/`Frontier` marks the run wrote, but no
/// cell is marked `Solution`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// The frontier emptied before the goal was reached.
    #[error("no path from {start} to {goal}")]
    NoSolution { start: Point, goal: Point },
}

/// An algorithm name that [`Algorithm`](crate::Algorithm) does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search algorithm {0:?}, expected one of bfs, dfs, dijkstra, astar")]
pub struct ParseAlgorithmError(pub String);
