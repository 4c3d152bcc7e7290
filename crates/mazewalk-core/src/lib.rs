//! **mazewalk-core** — the grid model for maze solving.
//!
//! A [`Grid`] is parsed from plain text (`'#'` walls, `' '` passageways) and
//! owns every [`Cell`]. Searches address cells by [`Point`] and relabel them
//! in place with the search-only kinds of [`CellKind`]; [`Identity`] tokens
//! give them a stable key for visited sets and parent maps.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellKind, Identity, KindClass};
pub use error::{GridError, Malformation};
pub use geom::{Direction, Point};
pub use grid::{Grid, GridIter, MIN_SIDE};
