//! The [`Grid`] type: a rectangular maze of [`Cell`]s with a fixed entry and
//! exit.
//!
//! Cells live in one row-major buffer owned by the grid. Everything else
//! refers to them by [`Point`], so a kind written by a search is seen by the
//! very next neighbor query.

use std::fmt;
use std::str::FromStr;

use crate::cell::{Cell, CellKind, Identity};
use crate::error::{GridError, Malformation};
use crate::geom::{Direction, Point};

/// Smallest number of rows and columns that still leaves an interior.
pub const MIN_SIDE: usize = 3;

/// A maze: a rectangular block of cells plus its start and goal.
///
/// `Clone` yields an independent copy, which is how two searches can run on
/// the same maze.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    start: Point,
    goal: Point,
}

impl Grid {
    /// Parse maze text with the conventional endpoints: the start is carved
    /// into the left border one row below the top, the goal into the right
    /// border one row above the bottom.
    ///
    /// Rows are separated by `'\n'` (a trailing newline and `"\r\n"` are
    /// accepted). `'#'` is a wall and `' '` a passageway; anything else is
    /// rejected.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let (cells, width, height) = parse_cells(s)?;
        let start = Point::new(1, 0);
        let goal = Point::new(height - 2, width - 1);
        Self::build(cells, width, height, start, goal)
    }

    /// Parse maze text with explicit endpoints. The same shape rules as
    /// [`parse`](Self::parse) apply; the endpoints only need to be
    /// in-bounds passageways.
    pub fn with_endpoints(s: &str, start: Point, goal: Point) -> Result<Self, GridError> {
        let (cells, width, height) = parse_cells(s)?;
        Self::build(cells, width, height, start, goal)
    }

    fn build(
        cells: Vec<Cell>,
        width: usize,
        height: usize,
        start: Point,
        goal: Point,
    ) -> Result<Self, GridError> {
        let grid = Self {
            cells,
            width,
            height,
            start,
            goal,
        };
        if grid.kind(start) != Some(CellKind::Passageway) {
            return Err(GridError::InvalidStart(start));
        }
        if grid.kind(goal) != Some(CellKind::Passageway) {
            return Err(GridError::InvalidGoal(goal));
        }
        log::trace!(
            "parsed {}x{} grid, start {} goal {}",
            height,
            width,
            start,
            goal
        );
        Ok(grid)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.row < self.height && p.col < self.width
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(p.row * self.width + p.col)
        } else {
            None
        }
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// The kind of the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn kind(&self, p: Point) -> Option<CellKind> {
        self.cell(p).map(|c| c.kind)
    }

    /// Relabel the cell at `p`. No-op if `p` is outside the grid or is a
    /// wall; walls keep their kind for the grid's whole life.
    pub fn set_kind(&mut self, p: Point, kind: CellKind) {
        let Some(i) = self.index(p) else {
            return;
        };
        if self.cells[i].kind == CellKind::Wall {
            log::trace!("set_kind: ignoring {kind:?} on wall {p}");
            return;
        }
        self.cells[i].kind = kind;
    }

    /// Set the priority of the cell at `p`. No-op if `p` is outside the grid.
    pub fn set_priority(&mut self, p: Point, priority: f64) {
        if let Some(i) = self.index(p) {
            self.cells[i].priority = priority;
        }
    }

    /// Whether `p` is the goal. Compares coordinates only.
    #[inline]
    pub fn is_goal(&self, p: Point) -> bool {
        p == self.goal
    }

    /// The identity token of the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn identity(&self, p: Point) -> Option<Identity> {
        self.cell(p).map(Cell::identity)
    }

    /// Append the orthogonal neighbors of `p` that are still plain
    /// passageways into `buf`, in [`Direction::ORDER`]. The caller clears
    /// `buf` before calling.
    ///
    /// Cells already marked by a search are skipped because their kind has
    /// changed; callers that need de-duplication keep their own visited set.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.neighbors_where(p, buf, |kind| kind == CellKind::Passageway);
    }

    /// Like [`neighbors`](Self::neighbors) but keeps every non-wall cell,
    /// whatever a search has marked it.
    pub fn walkable_neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.neighbors_where(p, buf, CellKind::is_walkable);
    }

    fn neighbors_where(&self, p: Point, buf: &mut Vec<Point>, keep: impl Fn(CellKind) -> bool) {
        for dir in Direction::ORDER {
            let Some(n) = p.step(dir) else {
                continue;
            };
            if self.kind(n).is_some_and(&keep) {
                buf.push(n);
            }
        }
    }

    /// Row-major iterator over `(Point, &Cell)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            inner: self.cells.iter(),
        }
    }

    /// Iterator over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }
}

/// Split maze text into a cell buffer, checking shape and characters.
fn parse_cells(s: &str) -> Result<(Vec<Cell>, usize, usize), Malformation> {
    let mut cells = Vec::with_capacity(s.len());
    let mut width = None;
    let mut height = 0;

    for (row, line) in s.lines().enumerate() {
        let mut found = 0;
        for (col, ch) in line.chars().enumerate() {
            let pos = Point::new(row, col);
            let kind = CellKind::from_char(ch)
                .filter(|_| CellKind::is_input_char(ch))
                .ok_or(Malformation::InvalidChar { ch, pos })?;
            cells.push(Cell::new(pos, kind));
            found += 1;
        }
        let expected = *width.get_or_insert(found);
        if found != expected {
            return Err(Malformation::Ragged {
                row,
                expected,
                found,
            });
        }
        height += 1;
    }

    let width = width.unwrap_or(0);
    if height < MIN_SIDE || width < MIN_SIDE {
        return Err(Malformation::TooSmall {
            rows: height,
            cols: width,
        });
    }
    Ok((cells, width, height))
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    /// Writes one character per cell, rows joined by `'\n'`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                write!(f, "{}", cell.kind.to_char())?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, &Cell)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    inner: std::slice::Iter<'a, Cell>,
}

impl<'a> Iterator for GridIter<'a> {
    type Item = (Point, &'a Cell);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.inner.next()?;
        Some((cell.pos(), cell))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for GridIter<'_> {}
