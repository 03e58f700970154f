use super::super::{Board, Cell, Color, Piece};

/// Whether a ray keeps stepping after visiting a cell
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum RayControl {
    Continue,
    Stop,
}

impl Board {
    /// Step outward from `origin` along `(dx, dy)`, visiting each
    /// in-bounds cell in order until the visitor stops the walk or the
    /// board edge is reached.
    ///
    /// Shared by sliding move generation and the check-detection
    /// sweep; each caller supplies its own blocking/capture policy.
    pub(crate) fn walk_ray<F>(&self, origin: Cell, (dx, dy): (isize, isize), mut visit: F)
    where
        F: FnMut(Cell, Option<Piece>) -> RayControl,
    {
        for distance in 1..8 {
            let Some(cell) = origin.offset(dx * distance, dy * distance) else {
                break;
            };
            if visit(cell, self.piece_at(cell)) == RayControl::Stop {
                break;
            }
        }
    }

    /// Sliding-piece destinations along each direction in `directions`.
    ///
    /// Empty cells are collected and the walk continues; the first
    /// occupant blocks its direction, and is itself collected as a
    /// capture when opposite-colored.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Cell,
        color: Color,
        directions: &[(isize, isize)],
    ) -> Vec<Cell> {
        let mut moves = Vec::new();
        for &direction in directions {
            self.walk_ray(from, direction, |cell, occupant| match occupant {
                None => {
                    moves.push(cell);
                    RayControl::Continue
                }
                Some(piece) if piece.color != color => {
                    moves.push(cell);
                    RayControl::Stop
                }
                Some(_) => RayControl::Stop,
            });
        }
        moves
    }
}
