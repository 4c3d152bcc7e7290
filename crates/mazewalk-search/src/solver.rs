use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use mazewalk_core::{CellKind, Grid, Identity, Point};

use crate::counts::CellCounts;
use crate::error::SolveError;

// ---------------------------------------------------------------------------
// Internal node for priority-queue searches
// ---------------------------------------------------------------------------

/// Heap entry ordered by `priority`, ties broken by insertion order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) pos: Point,
    pub(crate) priority: f64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority, then
        // oldest entry, first.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for NodeRef {}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// Runs searches over a [`Grid`], owning all run-scoped state.
///
/// The frontier containers, visited set and parent map are cleared at the
/// start of every run and kept afterwards, so one `Solver` can solve many
/// grids in turn without reallocating.
#[derive(Debug, Default)]
pub struct Solver {
    // BFS frontier
    pub(crate) queue: VecDeque<Point>,
    // DFS backtracking stack
    pub(crate) stack: Vec<Point>,
    // priority frontier
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) seq: u64,
    pub(crate) costs: HashMap<Identity, u32>,
    // BFS/DFS only; priority search de-duplicates through `costs`
    pub(crate) visited: HashSet<Identity>,
    pub(crate) parents: HashMap<Identity, Option<Point>>,
    // scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl Solver {
    /// Create a solver with empty caches.
    pub fn new() -> Self {
        Self {
            nbuf: Vec::with_capacity(4),
            ..Self::default()
        }
    }

    /// Clear every container and seed the bookkeeping with the start cell,
    /// which has no parent.
    pub(crate) fn begin(&mut self, grid: &Grid) {
        self.queue.clear();
        self.stack.clear();
        self.open.clear();
        self.seq = 0;
        self.costs.clear();
        self.visited.clear();
        self.parents.clear();

        if let Some(id) = grid.identity(grid.start()) {
            self.visited.insert(id);
            self.parents.insert(id, None);
        }
    }

    pub(crate) fn push_open(&mut self, pos: Point, priority: f64) {
        self.open.push(NodeRef {
            pos,
            priority,
            seq: self.seq,
        });
        self.seq += 1;
    }

    /// Close out a run: on success mark the path back from the goal, on
    /// failure report that the frontier ran dry.
    pub(crate) fn finish(
        &self,
        grid: &mut Grid,
        label: &str,
        found: bool,
    ) -> Result<Vec<Point>, SolveError> {
        if !found {
            log::debug!(
                "{label}: frontier exhausted, {} unreachable from {}",
                grid.goal(),
                grid.start()
            );
            return Err(SolveError::NoSolution {
                start: grid.start(),
                goal: grid.goal(),
            });
        }

        let goal = grid.goal();
        let path = self.backtrack(grid, goal);
        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "{label}: path of {} cells, {}",
                path.len(),
                CellCounts::of(grid)
            );
        }
        Ok(path)
    }

    /// Follow parent links from `from` back to the start, marking each cell
    /// as part of the solution. Returns the path in start-to-goal order.
    pub(crate) fn backtrack(&self, grid: &mut Grid, from: Point) -> Vec<Point> {
        let mut path = Vec::new();
        let mut current = Some(from);
        while let Some(p) = current {
            grid.set_kind(p, CellKind::Solution);
            path.push(p);
            current = grid
                .identity(p)
                .and_then(|id| self.parents.get(&id).copied().flatten());
        }
        path.reverse();
        path
    }
}
