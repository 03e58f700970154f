use super::super::{Board, BoardError, Cell, Color, PieceKind};
use super::{RayControl, ALL_DIRECTIONS, KNIGHT_OFFSETS};

/// Does an attacker piece sitting `distance` cells from the king along
/// `direction` (a unit vector pointing away from the king) deliver
/// check on that ray?
fn delivers_check(
    kind: PieceKind,
    attacker: Color,
    direction: (isize, isize),
    distance: usize,
) -> bool {
    let diagonal = direction.0 != 0 && direction.1 != 0;
    match kind {
        PieceKind::Queen => true,
        PieceKind::Rook => !diagonal,
        PieceKind::Bishop => diagonal,
        PieceKind::King => distance == 1,
        PieceKind::Pawn => {
            // The king must sit on a capture square of the pawn: one
            // diagonal step away, with the ray from the king running
            // against the pawn's forward direction.
            distance == 1 && diagonal && direction.1 == -attacker.pawn_direction()
        }
        PieceKind::Knight => false,
    }
}

impl Board {
    /// Cell holding `color`'s king, scanning in slot order
    pub(crate) fn find_king(&self, color: Color) -> Option<Cell> {
        self.pieces()
            .find(|&(_, piece)| piece.color == color && piece.kind == PieceKind::King)
            .map(|(cell, _)| cell)
    }

    /// Whether `color`'s king is currently attacked.
    ///
    /// Probes the knight offsets around the king, then sweeps all
    /// eight directions outward as if the king were a queen: the first
    /// occupant of each ray either delivers check (a matching piece on
    /// a matching ray) or blocks that ray entirely.
    ///
    /// A board without the color's king is an invariant violation
    /// during active play and reported as `KingNotFound`.
    pub fn in_check(&self, color: Color) -> Result<bool, BoardError> {
        let king = self
            .find_king(color)
            .ok_or(BoardError::KingNotFound { color })?;
        let attacker = color.opponent();

        for &(dx, dy) in &KNIGHT_OFFSETS {
            if let Some(cell) = king.offset(dx, dy) {
                let knight_there = self
                    .piece_at(cell)
                    .is_some_and(|p| p.color == attacker && p.kind == PieceKind::Knight);
                if knight_there {
                    #[cfg(feature = "logging")]
                    log::trace!("{color} king at {king} is in check from a knight at {cell}");
                    return Ok(true);
                }
            }
        }

        for &direction in &ALL_DIRECTIONS {
            let mut checked = false;
            let mut distance = 0;
            self.walk_ray(king, direction, |_, occupant| {
                distance += 1;
                let Some(piece) = occupant else {
                    return RayControl::Continue;
                };
                if piece.color == attacker
                    && delivers_check(piece.kind, attacker, direction, distance)
                {
                    checked = true;
                }
                // First occupant blocks the ray either way.
                RayControl::Stop
            });
            if checked {
                #[cfg(feature = "logging")]
                log::trace!("{color} king at {king} is in check along {direction:?}");
                return Ok(true);
            }
        }

        Ok(false)
    }
}
