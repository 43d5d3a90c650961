//! Errors raised by the game session.

use std::fmt;

use crate::board::{GameStatus, Move, Piece, Square};

/// Error type for session operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game has already ended
    GameOver { status: GameStatus },
    /// The selected square does not hold a piece of the side to move
    NotOwnPiece { square: Square },
    /// A destination was chosen with no square selected
    NoSelection,
    /// The move is not legal in the current position
    IllegalMove { mv: Move },
    /// A promotion choice must be made before anything else
    PromotionPending,
    /// A promotion piece was supplied when none is expected
    NoPromotionPending,
    /// The piece cannot be promoted to
    InvalidPromotion { piece: Piece },
    /// History index beyond the recorded plies
    PlyOutOfRange { ply: usize, len: usize },
    /// Only the initial position is recorded
    NothingToTakeBack,
    /// An engine reply was computed for a position the game has left
    StaleReply { requested: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver { status } => write!(f, "Game is over ({status})"),
            GameError::NotOwnPiece { square } => {
                write!(f, "Square {square} does not hold a piece of the side to move")
            }
            GameError::NoSelection => write!(f, "No square selected"),
            GameError::IllegalMove { mv } => write!(f, "Illegal move '{mv}'"),
            GameError::PromotionPending => write!(f, "A promotion choice is pending"),
            GameError::NoPromotionPending => write!(f, "No promotion is pending"),
            GameError::InvalidPromotion { piece } => {
                write!(f, "Cannot promote to {piece:?}")
            }
            GameError::PlyOutOfRange { ply, len } => {
                write!(f, "Ply {ply} out of range (history has {len} positions)")
            }
            GameError::NothingToTakeBack => write!(f, "No move to take back"),
            GameError::StaleReply { requested } => {
                write!(f, "Engine reply was for another position ({requested})")
            }
        }
    }
}

impl std::error::Error for GameError {}
