use super::super::{Board, Cell, Color};
use super::KNIGHT_OFFSETS;

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Cell, color: Color) -> Vec<Cell> {
        self.step_targets(from, color, &KNIGHT_OFFSETS)
    }
}
