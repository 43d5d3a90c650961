//! Decoding of best-move replies.

use std::fmt;

use crate::board::{file_to_col, rank_to_row, Move, MoveParseError, Piece, Square};

/// Tokens an engine uses to say it has no move to offer
const NO_MOVE_SENTINELS: [&str; 3] = ["(none)", "none", "0000"];

/// A move proposed by the opponent engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BestMove(pub Move);

impl BestMove {
    /// Decode a long-algebraic reply such as `e2e4` or `e7e8q`.
    ///
    /// Files map to columns (a=0 .. h=7) and ranks to rows (8 - rank). The
    /// "no move" sentinels decode to `Ok(None)`.
    pub fn parse(token: &str) -> Result<Option<BestMove>, MoveParseError> {
        let token = token.trim();
        if NO_MOVE_SENTINELS.contains(&token) {
            return Ok(None);
        }

        let chars: Vec<char> = token.chars().collect();
        if chars.len() < 4 || chars.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }

        let square = |file: char, rank: char| -> Result<Square, MoveParseError> {
            match (file_to_col(file), rank_to_row(rank)) {
                (Some(col), Some(row)) => Ok(Square(row, col)),
                _ => Err(MoveParseError::InvalidSquare {
                    notation: token.to_string(),
                }),
            }
        };
        let from = square(chars[0], chars[1])?;
        let to = square(chars[2], chars[3])?;

        let promotion = match chars.get(4) {
            None => None,
            Some(&c) => match Piece::from_char(c) {
                Some(piece) if piece.is_promotion_target() => Some(piece),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        Ok(Some(BestMove(Move {
            from,
            to,
            promotion,
        })))
    }
}

impl From<BestMove> for Move {
    fn from(best: BestMove) -> Move {
        best.0
    }
}

impl fmt::Display for BestMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
