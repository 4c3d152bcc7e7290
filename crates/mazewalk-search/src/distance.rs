use mazewalk_core::Point;

use crate::traits::Heuristic;

/// No estimate at all: priority search degenerates to Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dijkstra;

impl Heuristic for Dijkstra {
    #[inline]
    fn estimate(&self, _from: Point, _goal: Point) -> u32 {
        0
    }

    fn name(&self) -> &'static str {
        "dijkstra"
    }
}

/// Manhattan (L1) distance, exact on an open 4-connected grid: A*.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Point, goal: Point) -> u32 {
        u32::try_from(from.manhattan(goal)).unwrap_or(u32::MAX)
    }

    fn name(&self) -> &'static str {
        "astar"
    }
}
