//! Core board types.
//!
//! - `Color`, `PieceKind` and `Piece` - the piece model
//! - `Cell` - (file, rank) board coordinates

mod cell;
mod piece;

pub use cell::Cell;
pub use piece::{Color, Piece, PieceKind};
