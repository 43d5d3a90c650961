use super::super::{Board, Color, Move, Square};

const DIAGONALS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    const fn directions(self) -> &'static [(isize, isize)] {
        match self {
            SliderType::Bishop => &DIAGONALS,
            SliderType::Rook => &ORTHOGONALS,
            SliderType::Queen => &ALL_DIRECTIONS,
        }
    }
}

impl Board {
    /// Cast a ray in each direction. A ray ends on the first occupied square,
    /// which is included only when it holds an opposing piece.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
        moves: &mut Vec<Move>,
    ) {
        for &(dr, dc) in slider.directions() {
            let mut current = from;
            while let Some(to) = current.offset(dr, dc) {
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to)),
                    Some((c, _)) => {
                        if c != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    }
}
