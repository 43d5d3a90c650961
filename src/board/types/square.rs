//! Square type and coordinate helpers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Column index for a file letter (a=0 .. h=7)
pub(crate) fn file_to_col(file: char) -> Option<usize> {
    match file {
        'a'..='h' => Some(file as usize - 'a' as usize),
        _ => None,
    }
}

/// Row index for a rank digit (8 -> 0 .. 1 -> 7)
pub(crate) fn rank_to_row(rank: char) -> Option<usize> {
    match rank {
        '1'..='8' => Some(8 - (rank as usize - '0' as usize)),
        _ => None,
    }
}

/// A square on the board, represented as (row, col).
///
/// Row 0 is Black's home rank (rank 8) and row 7 is White's (rank 1); column 0
/// is file a.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Get the row (0-7, where 0 = rank 8)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Get the column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Step by a (row, col) delta, returning `None` when leaving the board
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Square> {
        let r = self.0 as isize + dr;
        let c = self.1 as isize + dc;
        if (0..8).contains(&r) && (0..8).contains(&c) {
            Some(Square(r as usize, c as usize))
        } else {
            None
        }
    }

    /// Every square, row by row from a8 to h1
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|r| (0..8).map(move |c| Square(r, c)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, 8 - self.0)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColumnOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let col = file_to_col(file).ok_or_else(invalid)?;
        let row = rank_to_row(rank).ok_or_else(invalid)?;
        Ok(Square(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_display_uses_ranks_from_white_side() {
        assert_eq!(Square(0, 0).to_string(), "a8");
        assert_eq!(Square(7, 4).to_string(), "e1");
        assert_eq!(Square(6, 4).to_string(), "e2");
    }

    #[test]
    fn test_square_from_str() {
        assert_eq!("e2".parse::<Square>(), Ok(Square(6, 4)));
        assert_eq!("h8".parse::<Square>(), Ok(Square(0, 7)));
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
        assert!("e22".parse::<Square>().is_err());
    }

    #[test]
    fn test_square_try_from_bounds() {
        assert_eq!(
            Square::try_from((8, 0)),
            Err(SquareError::RowOutOfBounds { row: 8 })
        );
        assert_eq!(
            Square::try_from((0, 8)),
            Err(SquareError::ColumnOutOfBounds { col: 8 })
        );
        assert_eq!(Square::try_from((3, 3)), Ok(Square(3, 3)));
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Square(0, 0).offset(-1, 0), None);
        assert_eq!(Square(0, 0).offset(1, 2), Some(Square(1, 2)));
        assert_eq!(Square(7, 7).offset(0, 1), None);
    }

    #[test]
    fn test_all_squares() {
        assert_eq!(Square::all().count(), 64);
        assert_eq!(Square::all().next(), Some(Square(0, 0)));
    }
}
