use super::super::{Board, Color, Move, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        for (dr, dc) in KNIGHT_OFFSETS {
            if let Some(to) = from.offset(dr, dc) {
                if !self.blocked_by_own(to, color) {
                    moves.push(Move::new(from, to));
                }
            }
        }
    }
}
