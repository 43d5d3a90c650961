//! Terminal-status predicates.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, CastlingRights, Color};

/// Classification of a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    #[default]
    InProgress,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Checkmate => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Board {
    /// Classify the position for `color` to move, scanning with `rights`.
    #[must_use]
    pub fn status(&self, color: Color, rights: CastlingRights) -> GameStatus {
        if self.has_legal_move(color, rights) {
            GameStatus::InProgress
        } else if self.is_in_check(color) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }

    /// True if `color` is in check and has no legal move.
    ///
    /// Castling is left out of the scan: it needs the king out of check, and
    /// whenever a castle is legal the king's one-file step toward the rook is
    /// legal too, so castling can never be a side's only move.
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color, CastlingRights::none())
    }

    /// True if `color` is not in check and has no legal move.
    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color, CastlingRights::none())
    }
}
