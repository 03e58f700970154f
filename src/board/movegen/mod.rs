mod check;
mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use sliders::RayControl;

use super::{Board, BoardError, Cell, Color, PieceKind};

/// The four orthogonal unit vectors (rook directions)
pub(crate) const ORTHOGONAL_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The four diagonal unit vectors (bishop directions)
pub(crate) const DIAGONAL_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All eight unit vectors (queen directions, king adjacency)
pub(crate) const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// The eight fixed knight offsets
pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

impl Board {
    /// Destinations reachable by the piece on `from`.
    ///
    /// Returns an empty list for an empty cell. The result is
    /// pseudo-legal: a destination is geometrically reachable and not
    /// occupied by a same-color piece, but executing it may still leave
    /// the mover's own king in check. Castling, en passant and
    /// promotion are not generated.
    pub fn legal_destinations(&self, from: Cell) -> Result<Vec<Cell>, BoardError> {
        let Some(piece) = self.get(from)? else {
            return Ok(Vec::new());
        };

        let destinations = match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece.color),
            PieceKind::Knight => self.generate_knight_moves(from, piece.color),
            PieceKind::King => self.generate_king_moves(from, piece.color),
            PieceKind::Rook => {
                self.generate_sliding_moves(from, piece.color, &ORTHOGONAL_DIRECTIONS)
            }
            PieceKind::Bishop => {
                self.generate_sliding_moves(from, piece.color, &DIAGONAL_DIRECTIONS)
            }
            PieceKind::Queen => self.generate_sliding_moves(from, piece.color, &ALL_DIRECTIONS),
        };
        Ok(destinations)
    }

    /// Fixed-offset targets shared by knight and king generation:
    /// off-board and same-color cells are excluded, enemy-occupied
    /// cells are captures, empty cells are included freely.
    pub(crate) fn step_targets(
        &self,
        from: Cell,
        color: Color,
        offsets: &[(isize, isize)],
    ) -> Vec<Cell> {
        let mut moves = Vec::with_capacity(offsets.len());
        for &(dx, dy) in offsets {
            let Some(to) = from.offset(dx, dy) else {
                continue;
            };
            match self.piece_at(to) {
                Some(occupant) if occupant.color == color => {}
                _ => moves.push(to),
            }
        }
        moves
    }
}
