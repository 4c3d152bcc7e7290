//! Geometry primitives: [`Point`] and [`Direction`].
//!
//! Coordinates are `(row, col)` with rows growing down and columns growing
//! right, matching the order in which maze text is read.

use std::fmt;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A lattice position. Row grows down, column grows right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The adjacent point one step in `dir`, or `None` when stepping up from
    /// row 0 or left from column 0.
    ///
    /// Only the lower bound is checked here; the grid checks the upper bound.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Point> {
        match dir {
            Direction::Down => Some(Self::new(self.row + 1, self.col)),
            Direction::Right => Some(Self::new(self.row, self.col + 1)),
            Direction::Up => self.row.checked_sub(1).map(|r| Self::new(r, self.col)),
            Direction::Left => self.col.checked_sub(1).map(|c| Self::new(self.row, c)),
        }
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Point) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Point {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four orthogonal steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Down,
    Right,
    Up,
    Left,
}

impl Direction {
    /// Neighbor discovery order. Depth-first search follows the first open
    /// entry, so changing this changes which path it finds.
    pub const ORDER: [Direction; 4] = [
        Direction::Down,
        Direction::Right,
        Direction::Up,
        Direction::Left,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Down => "down",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Left => "left",
        };
        f.write_str(s)
    }
}
