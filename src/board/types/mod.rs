//! Core chess types.
//!
//! This module contains the value types shared by every rules component:
//! - `Piece` and `Color` - piece kinds and sides
//! - `Square` - (row, col) board coordinate
//! - `Move` - source, destination and optional promotion
//! - `CastlingRights` - has-moved flags for kings and rooks

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastlingRights, CastlingSide};
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
pub(crate) use square::{file_to_col, rank_to_row};
