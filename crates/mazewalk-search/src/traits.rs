use mazewalk_core::Point;

/// Cost-to-goal estimate driving [`Solver::solve_priority`](crate::Solver::solve_priority).
///
/// Every step costs 1, so an estimate that never exceeds the number of steps
/// left (admissible) and drops by at most 1 per step (consistent) yields a
/// shortest path.
pub trait Heuristic {
    /// Estimated number of steps from `from` to `goal`.
    fn estimate(&self, from: Point, goal: Point) -> u32;

    /// Name used in log output.
    fn name(&self) -> &'static str {
        "priority"
    }
}
