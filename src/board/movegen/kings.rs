use super::super::{Board, Cell, Color};
use super::ALL_DIRECTIONS;

impl Board {
    /// King destinations: the eight adjacent cells, minus same-color
    /// occupancy. No castling.
    pub(crate) fn generate_king_moves(&self, from: Cell, color: Color) -> Vec<Cell> {
        self.step_targets(from, color, &ALL_DIRECTIONS)
    }
}
