use super::super::{Board, CastlingRights, CastlingSide, Color, Move, Piece, Square};
use super::GenMode;

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    pub(crate) fn generate_king_moves(
        &self,
        from: Square,
        color: Color,
        rights: CastlingRights,
        mode: GenMode,
        moves: &mut Vec<Move>,
    ) {
        for (dr, dc) in KING_OFFSETS {
            if let Some(to) = from.offset(dr, dc) {
                if !self.blocked_by_own(to, color) {
                    moves.push(Move::new(from, to));
                }
            }
        }

        if mode == GenMode::Normal {
            self.generate_castling_moves(from, color, rights, moves);
        }
    }

    fn generate_castling_moves(
        &self,
        from: Square,
        color: Color,
        rights: CastlingRights,
        moves: &mut Vec<Move>,
    ) {
        let home = color.home_row();
        if from != Square(home, 4) {
            return;
        }
        let castle_sides: Vec<CastlingSide> = CastlingSide::BOTH
            .into_iter()
            .filter(|&side| rights.can_castle(color, side))
            .collect();
        if castle_sides.is_empty() || self.is_in_check(color) {
            return;
        }

        let opponent = color.opponent();
        for side in castle_sides {
            if self.piece_at(Square(home, side.rook_col())) != Some((color, Piece::Rook)) {
                continue;
            }

            // Squares strictly between king and rook must be empty.
            let (lo, hi) = match side {
                CastlingSide::Kingside => (5, 7),
                CastlingSide::Queenside => (1, 4),
            };
            if !(lo..hi).all(|col| self.is_empty(Square(home, col))) {
                continue;
            }

            // The two squares the king crosses, not counting its start.
            let step: isize = match side {
                CastlingSide::Kingside => 1,
                CastlingSide::Queenside => -1,
            };
            let crossed = [from.offset(0, step), from.offset(0, 2 * step)];
            let safe = crossed
                .into_iter()
                .flatten()
                .all(|sq| !self.is_square_attacked(sq, opponent));
            if safe {
                moves.push(Move::new(from, Square(home, side.king_target_col())));
            }
        }
    }
}
