//! Error types for board operations.

use std::fmt;

use super::types::{Cell, Color};

/// Error type for board accessors and rules queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Cell argument outside the 8x8 board
    OutOfRange { cell: Cell },
    /// Move execution requested from an empty cell
    NoPieceAtSource { cell: Cell },
    /// Check detection found no king of the given color
    KingNotFound { color: Color },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfRange { cell } => {
                write!(f, "Cell {cell} is outside the 8x8 board")
            }
            BoardError::NoPieceAtSource { cell } => {
                write!(f, "No piece on source cell {cell}")
            }
            BoardError::KingNotFound { color } => {
                write!(f, "No {color} king on the board")
            }
        }
    }
}

impl std::error::Error for BoardError {}
