use super::super::{Board, Color, Move, Square};
use super::GenMode;

impl Board {
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Square,
        color: Color,
        mode: GenMode,
        moves: &mut Vec<Move>,
    ) {
        let dir = color.pawn_direction();

        if mode == GenMode::Attack {
            for dc in [-1, 1] {
                if let Some(target) = from.offset(dir, dc) {
                    moves.push(Move::new(from, target));
                }
            }
            return;
        }

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                moves.push(Move::new(from, forward));
                if from.row() == color.pawn_start_row() {
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if self.is_empty(double) {
                            moves.push(Move::new(from, double));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(target) = from.offset(dir, dc) {
                if let Some((target_color, _)) = self.piece_at(target) {
                    if target_color != color {
                        moves.push(Move::new(from, target));
                    }
                }
            }
        }
    }
}
