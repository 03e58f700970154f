//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `setup.rs` - Starting arrangement and board lifecycle
//! - `moves.rs` - Move execution and capture semantics
//! - `movegen.rs` - Per-piece destination generation
//! - `check.rs` - Check detection
//! - `proptest.rs` - Property-based tests

mod setup;

use crate::board::{Board, Cell, Color, Piece, PieceKind};

/// Build a board holding exactly the given pieces
fn board_with(pieces: &[(Cell, Color, PieceKind)]) -> Board {
    let mut board = Board::empty();
    for &(cell, color, kind) in pieces {
        board.set(cell, Some(Piece::new(color, kind))).unwrap();
    }
    board
}
