use super::super::{Board, Cell, Color};

impl Board {
    /// Pawn destinations: single advance onto an empty cell, double
    /// advance from the start rank through two empty cells, and the
    /// two diagonal-forward cells when enemy-occupied. Pawns never
    /// capture straight ahead; no en passant.
    pub(crate) fn generate_pawn_moves(&self, from: Cell, color: Color) -> Vec<Cell> {
        let mut moves = Vec::with_capacity(4);
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(0, dir) {
            if self.is_empty_cell(forward) {
                moves.push(forward);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = from.offset(0, 2 * dir) {
                        if self.is_empty_cell(double) {
                            moves.push(double);
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(df, dir) else {
                continue;
            };
            if let Some(occupant) = self.piece_at(target) {
                if occupant.color != color {
                    moves.push(target);
                }
            }
        }

        moves
    }
}
