//! The move executor: a pure board-to-board transformation.

use super::{Board, CastlingSide, Color, Piece, Square};

impl Board {
    /// Apply a move and return the resulting board with the captured piece.
    ///
    /// The receiver is left untouched. A king stepping two files castles: the
    /// rook is relocated based on the destination column alone (column 6
    /// kingside, column 2 queenside). A pawn reaching its farthest rank
    /// becomes `promotion`; it becomes a queen when no choice is given or the
    /// choice is not a promotion piece (a pawn or a king). The rook displaced
    /// by castling is never reported as a capture.
    ///
    /// Castling rights are not touched here; the caller records them with
    /// [`CastlingRights::record_move`](super::CastlingRights::record_move)
    /// using the board from before the move.
    #[must_use]
    pub fn apply_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> (Board, Option<(Color, Piece)>) {
        let mut next = self.clone();
        let Some((color, piece)) = self.piece_at(from) else {
            return (next, None);
        };
        let captured = self.piece_at(to);

        next.set_piece(from, None);
        let placed = if piece == Piece::Pawn && to.row() == color.promotion_row() {
            promotion
                .filter(|p| p.is_promotion_target())
                .unwrap_or(Piece::Queen)
        } else {
            piece
        };
        next.set_piece(to, Some((color, placed)));

        if piece == Piece::King && from.col().abs_diff(to.col()) == 2 {
            if let Some(side) = CastlingSide::from_king_target(to.col()) {
                let rook_from = Square(to.row(), side.rook_col());
                let rook_to = Square(to.row(), side.rook_target_col());
                let rook = next.piece_at(rook_from);
                next.set_piece(rook_from, None);
                next.set_piece(rook_to, rook);
            }
        }

        (next, captured)
    }
}
