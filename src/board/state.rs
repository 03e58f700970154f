use std::fmt;

use super::error::BoardError;
use super::types::{Cell, Color, Piece, PieceKind};

/// Back-rank piece arrangement in file order
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 chess board: one optional piece per cell.
///
/// The board holds position only. Whose turn it is, castling and
/// en-passant rights, and move history all belong to the controller
/// driving the board. Cloning is explicit; a game in progress must
/// have exactly one live board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Board {
    /// Create a board with the standard starting arrangement
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.reset_to_start();
        board
    }

    /// Create a board with all 64 cells empty
    #[must_use]
    pub fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    /// True if `cell` lies on the 8x8 board
    #[inline]
    #[must_use]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.file() < 8 && cell.rank() < 8
    }

    fn check_bounds(&self, cell: Cell) -> Result<(), BoardError> {
        if self.in_bounds(cell) {
            Ok(())
        } else {
            Err(BoardError::OutOfRange { cell })
        }
    }

    /// Read the contents of `cell`
    pub fn get(&self, cell: Cell) -> Result<Option<Piece>, BoardError> {
        self.check_bounds(cell)?;
        Ok(self.cells[cell.as_index()])
    }

    /// Overwrite `cell` with a piece, or clear it with `None`
    pub fn set(&mut self, cell: Cell, piece: Option<Piece>) -> Result<(), BoardError> {
        self.check_bounds(cell)?;
        self.cells[cell.as_index()] = piece;
        Ok(())
    }

    /// Contents of a cell the caller has already validated as in-bounds
    #[inline]
    pub(crate) fn piece_at(&self, cell: Cell) -> Option<Piece> {
        self.cells[cell.as_index()]
    }

    #[inline]
    pub(crate) fn is_empty_cell(&self, cell: Cell) -> bool {
        self.piece_at(cell).is_none()
    }

    /// Relocate the piece on `from` to `to`, overwriting whatever
    /// occupies `to`.
    ///
    /// Captures happen here: the occupant of `to` is replaced and not
    /// recorded anywhere. No legality check is performed — the caller
    /// is expected to pick `to` from `legal_destinations`. A failed
    /// call leaves the board untouched.
    pub fn move_piece(&mut self, from: Cell, to: Cell) -> Result<(), BoardError> {
        self.check_bounds(from)?;
        self.check_bounds(to)?;
        let piece = self
            .piece_at(from)
            .ok_or(BoardError::NoPieceAtSource { cell: from })?;

        #[cfg(feature = "logging")]
        log::trace!("move {:?} {:?} from {from} to {to}", piece.color, piece.kind);

        self.cells[from.as_index()] = None;
        self.cells[to.as_index()] = Some(piece);
        Ok(())
    }

    /// Clear the board and place the standard 32-piece starting
    /// arrangement.
    ///
    /// Black occupies ranks 0 and 1, white ranks 6 and 7 (ranks grow
    /// downward from the top of the screen).
    pub fn reset_to_start(&mut self) {
        self.cells = [None; 64];
        for color in Color::BOTH {
            let back = color.back_rank();
            let pawns = color.pawn_start_rank();
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                self.cells[Cell(file, back).as_index()] = Some(Piece::new(color, kind));
                self.cells[Cell(file, pawns).as_index()] =
                    Some(Piece::new(color, PieceKind::Pawn));
            }
        }
    }

    /// Iterate over all occupied cells and their pieces.
    ///
    /// This is the query the rendering layer uses for draw-time sprite
    /// placement.
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.map(|piece| (Cell::from_index(idx), piece)))
    }

    /// Number of pieces on the board
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|slot| slot.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for rank in 0..8 {
            write!(f, "{rank} |")?;
            for file in 0..8 {
                let ch = match self.cells[Cell(file, rank).as_index()] {
                    Some(piece) => piece.kind.to_char(piece.color),
                    None => '.',
                };
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        writeln!(f, "    0   1   2   3   4   5   6   7")
    }
}
