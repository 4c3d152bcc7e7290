//! Errors raised while building a [`Grid`](crate::Grid).

use crate::geom::Point;

/// Why the maze text does not describe a usable grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The text is not a rectangular block of known characters.
    #[error("malformed grid: {0}")]
    Malformed(#[from] Malformation),
    /// The entry cell is missing or not a passageway.
    #[error("start cell {0} is not a passageway")]
    InvalidStart(Point),
    /// The exit cell is missing or not a passageway.
    #[error("goal cell {0} is not a passageway")]
    InvalidGoal(Point),
}

/// Shape and content problems found while parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Malformation {
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{rows}x{cols} grid has no interior, need at least 3x3")]
    TooSmall { rows: usize, cols: usize },
    #[error("unexpected character {ch:?} at {pos}")]
    InvalidChar { ch: char, pos: Point },
}
