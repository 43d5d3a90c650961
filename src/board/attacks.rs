//! Attack queries built on top of attack-mode move generation.

use super::{Board, CastlingRights, Color, GenMode, Square};

impl Board {
    /// True if any piece of `by` could move to (or capture on) `square`.
    ///
    /// Scans every piece of `by` and runs its geometry in attack mode, so
    /// castling is never considered.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.pieces_of(by).any(|(from, _)| {
            self.pseudo_legal_moves(from, by, CastlingRights::none(), GenMode::Attack)
                .iter()
                .any(|m| m.to == square)
        })
    }

    /// True if `color`'s king is attacked.
    ///
    /// A board without a king of that color reports `false`.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king_sq) => self.is_square_attacked(king_sq, color.opponent()),
            None => false,
        }
    }
}
