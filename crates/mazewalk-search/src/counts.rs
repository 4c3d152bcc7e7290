use std::fmt;

use mazewalk_core::{CellKind, Grid};

/// Summary of how a search left a grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCounts {
    /// Cells on the marked path.
    pub solution: usize,
    /// Expanded cells. Solution cells were expanded too and count here.
    pub visited: usize,
    /// Cells discovered but never expanded.
    pub frontier: usize,
}

impl CellCounts {
    /// Count the search marks in `grid` with a single scan.
    pub fn of(grid: &Grid) -> Self {
        let mut counts = Self::default();
        for (_, cell) in grid.iter() {
            match cell.kind {
                CellKind::Solution => {
                    counts.solution += 1;
                    counts.visited += 1;
                }
                CellKind::Visited => counts.visited += 1,
                CellKind::Frontier => counts.frontier += 1,
                CellKind::Wall | CellKind::Passageway => {}
            }
        }
        counts
    }
}

/// Count the search marks in `grid`. Same as [`CellCounts::of`].
#[inline]
pub fn cell_counts(grid: &Grid) -> CellCounts {
    CellCounts::of(grid)
}

impl fmt::Display for CellCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "solution={} visited={} frontier={}",
            self.solution, self.visited, self.frontier
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use mazewalk_core::Point;

    #[test]
    fn fresh_grid_counts_zero() {
        let grid = Grid::parse(fixtures::PERFECT).unwrap();
        assert_eq!(cell_counts(&grid), CellCounts::default());
    }

    #[test]
    fn solution_counts_as_visited() {
        let mut grid = Grid::parse(fixtures::ROOM).unwrap();
        grid.set_kind(Point::new(1, 0), CellKind::Solution);
        grid.set_kind(Point::new(1, 1), CellKind::Solution);
        grid.set_kind(Point::new(1, 2), CellKind::Visited);
        grid.set_kind(Point::new(2, 2), CellKind::Frontier);
        let counts = cell_counts(&grid);
        assert_eq!(
            counts,
            CellCounts {
                solution: 2,
                visited: 3,
                frontier: 1
            }
        );
        assert_eq!(counts.to_string(), "solution=2 visited=3 frontier=1");
    }

    #[test]
    fn counting_does_not_mutate() {
        let mut grid = Grid::parse(fixtures::ROOM).unwrap();
        grid.set_kind(Point::new(2, 2), CellKind::Frontier);
        let before = grid.clone();
        let _ = cell_counts(&grid);
        assert_eq!(grid, before);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn counts_round_trip() {
        let counts = CellCounts {
            solution: 11,
            visited: 16,
            frontier: 0,
        };
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"solution":11,"visited":16,"frontier":0}"#);
        let back: CellCounts = serde_json::from_str(&json).unwrap();
        assert_eq!(back, counts);
    }
}
