use crate::board::{
    Board, CastlingRights, Color, FenError, GameStatus, Move, Piece, Square,
};

use super::options::StatusRights;

/// One history record: a board snapshot paired with the rights and side to
/// move that belong to it.
///
/// Positions are never modified after creation; [`Position::after`] builds
/// the successor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub rights: CastlingRights,
    /// The move that produced this position, if any
    pub last_move: Option<Move>,
    /// The piece captured by `last_move`, if any
    pub captured: Option<(Color, Piece)>,
}

impl Position {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn initial() -> Self {
        Position {
            board: Board::initial(),
            side_to_move: Color::White,
            rights: CastlingRights::new(),
            last_move: None,
            captured: None,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let (board, side_to_move, rights) = Board::try_from_fen(fen)?;
        Ok(Position {
            board,
            side_to_move,
            rights,
            last_move: None,
            captured: None,
        })
    }

    #[must_use]
    pub fn to_fen(&self) -> String {
        self.board.to_fen(self.side_to_move, self.rights)
    }

    /// Legal moves of the side to move for the piece on `from`.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> Vec<Move> {
        self.board.legal_moves(from, self.side_to_move, self.rights)
    }

    #[must_use]
    pub fn all_legal_moves(&self) -> Vec<Move> {
        self.board.all_legal_moves(self.side_to_move, self.rights)
    }

    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.board.is_in_check(self.side_to_move)
    }

    #[must_use]
    pub fn status(&self, scan: StatusRights) -> GameStatus {
        let rights = match scan {
            StatusRights::Actual => self.rights,
            StatusRights::Assumed => CastlingRights::new(),
        };
        self.board.status(self.side_to_move, rights)
    }

    /// True if `mv` moves a pawn of the side to move onto its last rank.
    #[must_use]
    pub fn is_promotion(&self, mv: Move) -> bool {
        matches!(
            self.board.piece_at(mv.from),
            Some((color, Piece::Pawn)) if color == self.side_to_move && mv.to.row() == color.promotion_row()
        )
    }

    /// The position after `mv`, without checking legality.
    ///
    /// Rights are recorded against the board from before the move, then the
    /// executor builds the new board and the turn passes.
    #[must_use]
    pub fn after(&self, mv: Move) -> Position {
        let mut rights = self.rights;
        rights.record_move(&self.board, mv.from, mv.to);
        let (board, captured) = self.board.apply_move(mv.from, mv.to, mv.promotion);
        Position {
            board,
            side_to_move: self.side_to_move.opponent(),
            rights,
            last_move: Some(mv),
            captured,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::initial()
    }
}
