use super::error::FenError;
use super::{Board, CastlingRights, Color, Piece, Square};

impl Board {
    /// Parse a position from FEN notation.
    ///
    /// Only placement, side to move and castling availability are read; the
    /// en passant and move-counter fields are accepted and ignored. Each side
    /// must have exactly one king.
    pub fn try_from_fen(fen: &str) -> Result<(Board, Color, CastlingRights), FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 3 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let placed = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(FenError::BadFileCount {
                        rank: row,
                        files: col + 1,
                    });
                }
                board.set_piece(Square(row, col), Some(placed));
                col += 1;
            }
            if col != 8 {
                return Err(FenError::BadFileCount {
                    rank: row,
                    files: col,
                });
            }
        }

        let side = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let rights = CastlingRights::from_fen_token(parts[2])?;

        let kings = |color| {
            board
                .pieces_of(color)
                .filter(|&(_, piece)| piece == Piece::King)
                .count()
        };
        let (white, black) = (kings(Color::White), kings(Color::Black));
        if white != 1 || black != 1 {
            return Err(FenError::KingCount { white, black });
        }

        Ok((board, side, rights))
    }

    /// Parse a board from FEN notation, discarding side to move and rights.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string").0
    }

    /// Encode the position as a single-line FEN string.
    ///
    /// En passant is always `-` and the counters are always `0 1`, since
    /// neither is tracked.
    #[must_use]
    pub fn to_fen(&self, side_to_move: Color, rights: CastlingRights) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut segment = String::new();
            let mut empty = 0;
            for col in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(row, col)) {
                    if empty > 0 {
                        segment.push_str(&empty.to_string());
                        empty = 0;
                    }
                    segment.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                segment.push_str(&empty.to_string());
            }
            rows.push(segment);
        }

        format!(
            "{} {} {} - 0 1",
            rows.join("/"),
            side_to_move.fen_char(),
            rights.to_fen_token()
        )
    }
}
