pub mod board;

pub use board::{Board, BoardError, Cell, Color, Piece, PieceKind};
