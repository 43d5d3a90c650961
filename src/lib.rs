//! Rules engine for standard chess.
//!
//! Enumerates legal moves, detects check, checkmate and stalemate, and applies
//! moves (castling and promotion included) to produce new board snapshots.
//! The [`game`] module threads castling rights and history alongside those
//! snapshots; [`engine`] guards the single request slot used to talk to an
//! external opponent engine.
//!
//! # Example
//! ```
//! use chess_rules::{Board, CastlingRights, Color};
//!
//! let board = Board::initial();
//! let moves = board.all_legal_moves(Color::White, CastlingRights::new());
//! assert_eq!(moves.len(), 20);
//! ```

#[cfg(feature = "logging")]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        log::$level!($($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        if false {
            let _ = format!($($arg)+);
        }
    };
}

pub mod board;
pub mod engine;
pub mod game;

pub use board::{Board, CastlingRights, Color, GameStatus, Move, Piece, Square};
pub use engine::{BestMove, EngineError, EngineLink, EngineRequest, Ticket};
pub use game::{Game, GameError, GameOptions, Position};
