//! Pseudo-legal move generation and the legality filter.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, CastlingRights, Color, Move, Piece, Square};

pub(crate) use sliders::SliderType;

/// Move-generation variant.
///
/// `Attack` is used when asking which squares a side attacks: castling is
/// never generated and pawns report their diagonal attacks instead of their
/// pushes. This breaks the recursion between castling legality and attack
/// queries without a second copy of the per-piece geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenMode {
    Normal,
    Attack,
}

impl Board {
    /// Moves for the piece on `from` that obey its geometry and occupancy
    /// rules, ignoring whether they leave the mover's king attacked.
    ///
    /// Returns an empty list when `from` is empty or holds a piece of the
    /// other color.
    #[must_use]
    pub fn pseudo_legal_moves(
        &self,
        from: Square,
        color: Color,
        rights: CastlingRights,
        mode: GenMode,
    ) -> Vec<Move> {
        let mut moves = Vec::new();
        match self.piece_at(from) {
            Some((c, piece)) if c == color => {
                self.generate_piece_moves(from, color, piece, rights, mode, &mut moves);
            }
            _ => {}
        }
        moves
    }

    fn generate_piece_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        rights: CastlingRights,
        mode: GenMode,
        moves: &mut Vec<Move>,
    ) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, mode, moves),
            Piece::Knight => self.generate_knight_moves(from, color, moves),
            Piece::Bishop => self.generate_slider_moves(from, color, SliderType::Bishop, moves),
            Piece::Rook => self.generate_slider_moves(from, color, SliderType::Rook, moves),
            Piece::Queen => self.generate_slider_moves(from, color, SliderType::Queen, moves),
            Piece::King => self.generate_king_moves(from, color, rights, mode, moves),
        }
    }

    /// True if `sq` holds a piece of `color`.
    #[inline]
    pub(crate) fn blocked_by_own(&self, sq: Square, color: Color) -> bool {
        matches!(self.piece_at(sq), Some((c, _)) if c == color)
    }

    /// Legal moves for the piece on `from`.
    ///
    /// Every pseudo-legal move is played on a scratch copy of the board (rook
    /// relocation included for castles) and kept only if `color`'s king is
    /// not attacked afterwards.
    #[must_use]
    pub fn legal_moves(&self, from: Square, color: Color, rights: CastlingRights) -> Vec<Move> {
        self.pseudo_legal_moves(from, color, rights, GenMode::Normal)
            .into_iter()
            .filter(|m| {
                let (next, _) = self.apply_move(m.from, m.to, m.promotion);
                !next.is_in_check(color)
            })
            .collect()
    }

    /// Legal moves for every piece of `color`.
    #[must_use]
    pub fn all_legal_moves(&self, color: Color, rights: CastlingRights) -> Vec<Move> {
        self.pieces_of(color)
            .flat_map(|(sq, _)| self.legal_moves(sq, color, rights))
            .collect()
    }

    /// True if `color` has at least one legal move.
    #[must_use]
    pub fn has_legal_move(&self, color: Color, rights: CastlingRights) -> bool {
        self.pieces_of(color)
            .any(|(sq, _)| !self.legal_moves(sq, color, rights).is_empty())
    }
}
