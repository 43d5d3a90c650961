use std::fmt;

use once_cell::sync::Lazy;

use super::{Color, Piece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

static INITIAL_BOARD: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for (col, piece) in BACK_RANK.iter().enumerate() {
        for color in Color::BOTH {
            board.set_piece(Square(color.home_row(), col), Some((color, *piece)));
            board.set_piece(Square(color.pawn_start_row(), col), Some((color, Piece::Pawn)));
        }
    }
    board
});

/// An 8x8 board snapshot.
///
/// Each square is either empty or holds exactly one colored piece. Boards are
/// treated as immutable values: every rules operation takes `&self` and the
/// move executor returns a fresh board.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    /// A board with no pieces on it.
    #[must_use]
    pub(crate) const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting position.
    #[must_use]
    pub fn initial() -> Self {
        INITIAL_BOARD.clone()
    }

    /// Build a board from a list of placed pieces. Later entries overwrite
    /// earlier ones on the same square.
    #[must_use]
    pub fn from_pieces<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (Square, Color, Piece)>,
    {
        let mut board = Board::empty();
        for (sq, color, piece) in pieces {
            board.set_piece(sq, Some((color, piece)));
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, value: Option<(Color, Piece)>) {
        self.squares[sq.0][sq.1] = value;
    }

    /// Occupied squares of one color, in row-major order
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((c, piece)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Location of `color`'s king, or `None` if it is not on the board
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|&(_, piece)| piece == Piece::King)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                let c = self
                    .piece_at(Square(row, col))
                    .map_or('.', |(color, piece)| piece.to_fen_char(color));
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        write!(f, "{self}")
    }
}
