//! Chess board representation and rules queries.
//!
//! A mailbox board: 64 optional-piece slots addressed by (file, rank)
//! cells, with the origin at the top-left and ranks growing downward.
//! Move generation is pseudo-legal — a destination is geometrically
//! reachable and not blocked by same-color occupancy, with no filtering
//! for moves that leave the mover's own king in check. Turn order and
//! move selection belong to the controller driving the board; after
//! executing a move, controllers typically query `in_check` for both
//! colors for status display.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Cell};
//!
//! let board = Board::new();
//! let moves = board.legal_destinations(Cell(4, 6)).unwrap();
//! println!("The e-file white pawn has {} destinations", moves.len());
//! ```

mod error;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::BoardError;
pub use state::Board;
pub use types::{Cell, Color, Piece, PieceKind};
