//! Cell type and coordinate utilities.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::BoardError;

/// A cell on the board, represented as (file, rank).
///
/// The origin is the top-left corner and ranks grow downward: black's
/// back rank is rank 0 and white's is rank 7. This matches the screen
/// layout the board is drawn in, not algebraic chess notation; pawn
/// directions and start ranks throughout the crate are written against
/// this convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell(pub usize, pub usize); // (file, rank)

impl Cell {
    /// Create a new cell with bounds checking
    #[must_use]
    pub fn new(file: usize, rank: usize) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Cell(file, rank))
        } else {
            None
        }
    }

    /// Get the file (0-7, where 0 is the leftmost column)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.0
    }

    /// Get the rank (0-7, where 0 is the topmost row)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.1
    }

    /// Get the cell's slot index (0-63, `file + rank * 8`)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 + self.1 * 8
    }

    /// Create a cell from a slot index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Cell(idx % 8, idx / 8)
    }

    /// Step by a (dx, dy) offset, returning `None` off the board
    #[must_use]
    pub(crate) fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        let file = self.0 as isize + dx;
        let rank = self.1 as isize + dy;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Cell(file as usize, rank as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Not algebraic notation: the rank axis is inverted relative
        // to it, so printing "e4" style names would mislead.
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Cell {
    type Error = BoardError;

    fn try_from((file, rank): (usize, usize)) -> Result<Self, Self::Error> {
        Cell::new(file, rank).ok_or(BoardError::OutOfRange {
            cell: Cell(file, rank),
        })
    }
}
