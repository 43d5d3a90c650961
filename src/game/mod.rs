//! Game session layer.
//!
//! Castling legality depends on history that a board snapshot cannot
//! recover, so each [`Position`] pairs a board with its own
//! [`CastlingRights`](crate::board::CastlingRights). [`Game`] keeps the full
//! list of positions and drives a ply through selection, optional promotion
//! choice, execution and status evaluation.
//!
//! # Example
//! ```
//! use chess_rules::game::{Game, PlyOutcome};
//! use chess_rules::GameStatus;
//!
//! let mut game = Game::default();
//! game.select("e2".parse().unwrap()).unwrap();
//! let outcome = game.choose_destination("e4".parse().unwrap()).unwrap();
//! assert_eq!(outcome, PlyOutcome::Played(GameStatus::InProgress));
//! ```

mod error;
mod options;
mod perft;
mod position;
mod session;

pub use error::GameError;
pub use options::{GameOptions, StatusRights};
pub use perft::perft;
pub use position::Position;
pub use session::{Game, PlyOutcome, Selection};
