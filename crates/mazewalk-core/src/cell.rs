//! The [`Cell`] type and its [`CellKind`] tag.

use crate::geom::Point;

/// What a lattice position currently holds.
///
/// `Wall` and `Passageway` come from the input text. The other three are
/// written by a search run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Wall,
    #[default]
    Passageway,
    Solution,
    Frontier,
    Visited,
}

impl CellKind {
    /// The character used when rendering this kind.
    pub const fn to_char(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Passageway => ' ',
            CellKind::Solution => '@',
            CellKind::Frontier => 'F',
            CellKind::Visited => 'V',
        }
    }

    /// The kind rendered as `ch`, if any.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(CellKind::Wall),
            ' ' => Some(CellKind::Passageway),
            '@' => Some(CellKind::Solution),
            'F' => Some(CellKind::Frontier),
            'V' => Some(CellKind::Visited),
            _ => None,
        }
    }

    /// Whether `ch` may appear in maze input. Search markers are output only.
    pub const fn is_input_char(ch: char) -> bool {
        matches!(Self::from_char(ch), Some(CellKind::Wall | CellKind::Passageway))
    }

    /// Anything but a wall can be walked on, including cells already on the
    /// solution path.
    pub const fn is_walkable(self) -> bool {
        !matches!(self, CellKind::Wall)
    }

    /// The identity class of this kind.
    pub const fn class(self) -> KindClass {
        match self {
            CellKind::Wall => KindClass::Wall,
            CellKind::Passageway | CellKind::Solution | CellKind::Frontier | CellKind::Visited => {
                KindClass::Open
            }
        }
    }
}

/// Coarse kind used in [`Identity`] tokens.
///
/// A cell keeps the `Open` class for as long as a run relabels it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KindClass {
    Wall,
    Open,
}

/// Canonical de-duplication key for a cell: kind class plus position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity {
    pub class: KindClass,
    pub pos: Point,
}

/// A single lattice position.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Point,
    pub kind: CellKind,
    /// Frontier key for priority search. `f64::INFINITY` until assigned.
    pub priority: f64,
}

impl Cell {
    /// A cell at `pos` with infinite priority.
    #[inline]
    pub const fn new(pos: Point, kind: CellKind) -> Self {
        Self {
            pos,
            kind,
            priority: f64::INFINITY,
        }
    }

    /// Position of the cell. Fixed for the lifetime of the grid.
    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn row(&self) -> usize {
        self.pos.row
    }

    #[inline]
    pub const fn col(&self) -> usize {
        self.pos.col
    }

    /// The identity token of this cell.
    #[inline]
    pub const fn identity(&self) -> Identity {
        Identity {
            class: self.kind.class(),
            pos: self.pos,
        }
    }
}
