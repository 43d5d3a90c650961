//! Board representation and the rules that operate on it.
//!
//! A [`Board`] is an immutable 8x8 snapshot. Move generation, the legality
//! filter, the move executor and the status predicates are all methods on it;
//! none of them mutate the receiver.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, CastlingRights, Color, Square};
//!
//! let board = Board::initial();
//! let e2: Square = "e2".parse().unwrap();
//! let moves = board.legal_moves(e2, Color::White, CastlingRights::new());
//! assert_eq!(moves.len(), 2);
//! ```

mod apply;
mod attacks;
mod error;
mod fen;
mod movegen;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use movegen::GenMode;
pub use state::Board;
pub use status::GameStatus;
pub use types::{CastlingRights, CastlingSide, Color, Move, Piece, Square};

pub(crate) use types::{file_to_col, rank_to_row, PROMOTION_PIECES};
