//! Castling rights, tracked as has-moved flags.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::error::FenError;
use crate::board::Board;

const WHITE_KING_MOVED: u8 = 1 << 0;
const WHITE_QUEEN_ROOK_MOVED: u8 = 1 << 1;
const WHITE_KING_ROOK_MOVED: u8 = 1 << 2;
const BLACK_KING_MOVED: u8 = 1 << 3;
const BLACK_QUEEN_ROOK_MOVED: u8 = 1 << 4;
const BLACK_KING_ROOK_MOVED: u8 = 1 << 5;

const ALL_MOVED: u8 = WHITE_KING_MOVED
    | WHITE_QUEEN_ROOK_MOVED
    | WHITE_KING_ROOK_MOVED
    | BLACK_KING_MOVED
    | BLACK_QUEEN_ROOK_MOVED
    | BLACK_KING_ROOK_MOVED;

/// Which rook a castling move pairs the king with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

impl CastlingSide {
    pub const BOTH: [CastlingSide; 2] = [CastlingSide::Kingside, CastlingSide::Queenside];

    /// Column the rook starts on
    #[inline]
    #[must_use]
    pub const fn rook_col(self) -> usize {
        match self {
            CastlingSide::Kingside => 7,
            CastlingSide::Queenside => 0,
        }
    }

    /// Column the king lands on
    #[inline]
    #[must_use]
    pub const fn king_target_col(self) -> usize {
        match self {
            CastlingSide::Kingside => 6,
            CastlingSide::Queenside => 2,
        }
    }

    /// Column the rook lands on, next to the king on the side it came from
    #[inline]
    #[must_use]
    pub const fn rook_target_col(self) -> usize {
        match self {
            CastlingSide::Kingside => 5,
            CastlingSide::Queenside => 3,
        }
    }

    /// Castling side implied by a king destination column, if any
    #[inline]
    #[must_use]
    pub const fn from_king_target(col: usize) -> Option<Self> {
        match col {
            6 => Some(CastlingSide::Kingside),
            2 => Some(CastlingSide::Queenside),
            _ => None,
        }
    }
}

/// Has-moved flags for both kings and all four rooks.
///
/// Flags only ever go from "not moved" to "moved"; nothing in the crate
/// clears one. The default value is "nothing has moved".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// Nothing has moved; every castle is still structurally possible
    #[must_use]
    pub const fn new() -> Self {
        CastlingRights(0)
    }

    /// Every king and rook has moved; no castling remains
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(ALL_MOVED)
    }

    const fn king_bit(color: Color) -> u8 {
        match color {
            Color::White => WHITE_KING_MOVED,
            Color::Black => BLACK_KING_MOVED,
        }
    }

    const fn rook_bit(color: Color, side: CastlingSide) -> u8 {
        match (color, side) {
            (Color::White, CastlingSide::Kingside) => WHITE_KING_ROOK_MOVED,
            (Color::White, CastlingSide::Queenside) => WHITE_QUEEN_ROOK_MOVED,
            (Color::Black, CastlingSide::Kingside) => BLACK_KING_ROOK_MOVED,
            (Color::Black, CastlingSide::Queenside) => BLACK_QUEEN_ROOK_MOVED,
        }
    }

    #[inline]
    #[must_use]
    pub const fn king_moved(self, color: Color) -> bool {
        self.0 & Self::king_bit(color) != 0
    }

    #[inline]
    #[must_use]
    pub const fn rook_moved(self, color: Color, side: CastlingSide) -> bool {
        self.0 & Self::rook_bit(color, side) != 0
    }

    #[inline]
    pub fn mark_king_moved(&mut self, color: Color) {
        self.0 |= Self::king_bit(color);
    }

    #[inline]
    pub fn mark_rook_moved(&mut self, color: Color, side: CastlingSide) {
        self.0 |= Self::rook_bit(color, side);
    }

    /// True while neither the king nor the rook of this pair has moved
    #[inline]
    #[must_use]
    pub const fn can_castle(self, color: Color, side: CastlingSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    /// Update the flags for a move about to be played on `before`.
    ///
    /// Any king move sets that king's flag, wherever it stands. A rook
    /// leaving its home corner sets the matching rook flag. A piece landing on
    /// a home corner also sets that rook's flag, since a captured rook can
    /// never castle again.
    pub fn record_move(&mut self, before: &Board, from: Square, to: Square) {
        if let Some((color, piece)) = before.piece_at(from) {
            let home = color.home_row();
            match piece {
                Piece::King => self.mark_king_moved(color),
                Piece::Rook if from.row() == home => {
                    for side in CastlingSide::BOTH {
                        if from.col() == side.rook_col() {
                            self.mark_rook_moved(color, side);
                        }
                    }
                }
                _ => {}
            }
        }
        for color in Color::BOTH {
            for side in CastlingSide::BOTH {
                if to == Square(color.home_row(), side.rook_col()) {
                    self.mark_rook_moved(color, side);
                }
            }
        }
    }

    /// Castling availability token for FEN (`KQkq` order, `-` when empty)
    #[must_use]
    pub fn to_fen_token(self) -> String {
        let mut token = String::new();
        for (color, side, c) in [
            (Color::White, CastlingSide::Kingside, 'K'),
            (Color::White, CastlingSide::Queenside, 'Q'),
            (Color::Black, CastlingSide::Kingside, 'k'),
            (Color::Black, CastlingSide::Queenside, 'q'),
        ] {
            if self.can_castle(color, side) {
                token.push(c);
            }
        }
        if token.is_empty() {
            token.push('-');
        }
        token
    }

    /// Rebuild has-moved flags from a FEN availability token.
    ///
    /// A missing right marks that rook as moved; a side with no rights at all
    /// also has its king marked as moved.
    pub fn from_fen_token(token: &str) -> Result<Self, FenError> {
        let mut available = [[false; 2]; 2];
        for c in token.chars() {
            match c {
                'K' => available[0][0] = true,
                'Q' => available[0][1] = true,
                'k' => available[1][0] = true,
                'q' => available[1][1] = true,
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        let mut rights = CastlingRights::new();
        for color in Color::BOTH {
            let [kingside, queenside] = available[color.index()];
            if !kingside {
                rights.mark_rook_moved(color, CastlingSide::Kingside);
            }
            if !queenside {
                rights.mark_rook_moved(color, CastlingSide::Queenside);
            }
            if !kingside && !queenside {
                rights.mark_king_moved(color);
            }
        }
        Ok(rights)
    }
}
