//! Perft: leaf-node counts of the legal move tree.

use crate::board::PROMOTION_PIECES;

use super::Position;

/// Count leaf positions `depth` plies below `position`.
///
/// Each promoting move counts once per promotion piece so totals line up with
/// published perft tables.
#[must_use]
pub fn perft(position: &Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    for mv in position.all_legal_moves() {
        if position.is_promotion(mv) {
            for piece in PROMOTION_PIECES {
                let mut promo = mv;
                promo.promotion = Some(piece);
                nodes += if depth == 1 {
                    1
                } else {
                    perft(&position.after(promo), depth - 1)
                };
            }
        } else if depth == 1 {
            nodes += 1;
        } else {
            nodes += perft(&position.after(mv), depth - 1);
        }
    }
    nodes
}
