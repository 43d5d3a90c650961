//! Edge case tests for special positions and the legality filter.

use crate::board::{Board, CastlingRights, Color, GenMode, Move, Piece, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn board(fen: &str) -> Board {
    Board::from_fen(fen)
}

#[test]
fn test_initial_position_has_twenty_moves() {
    let board = Board::initial();
    let moves = board.all_legal_moves(Color::White, CastlingRights::new());
    assert_eq!(moves.len(), 20);

    let knight_moves = moves
        .iter()
        .filter(|m| board.piece_at(m.from) == Some((Color::White, Piece::Knight)))
        .count();
    assert_eq!(knight_moves, 4);
}

#[test]
fn test_black_has_twenty_replies_to_every_opening_move() {
    let board = Board::initial();
    for mv in board.all_legal_moves(Color::White, CastlingRights::new()) {
        let (next, _) = board.apply_move(mv.from, mv.to, mv.promotion);
        assert!(!next.is_in_check(Color::Black));
        assert_eq!(
            next.all_legal_moves(Color::Black, CastlingRights::new()).len(),
            20,
            "after {mv}"
        );
    }
}

#[test]
fn test_moves_for_empty_or_enemy_square_are_empty() {
    let board = Board::initial();
    let rights = CastlingRights::new();
    assert!(board.legal_moves(sq("e4"), Color::White, rights).is_empty());
    assert!(board.legal_moves(sq("e7"), Color::White, rights).is_empty());
    assert!(board
        .pseudo_legal_moves(sq("g8"), Color::White, rights, GenMode::Normal)
        .is_empty());
}

#[test]
fn test_back_rank_mate() {
    let board = board("4q2k/8/8/8/8/8/3P1P2/3RKR2 w - - 0 1");
    assert!(board.is_in_check(Color::White));
    assert!(board.is_checkmate(Color::White));
    assert!(!board.is_stalemate(Color::White));
    assert!(board
        .all_legal_moves(Color::White, CastlingRights::none())
        .is_empty());
}

#[test]
fn test_check_with_interposition_is_not_mate() {
    // The bishop on f1 can block on e2.
    let board = board("4q2k/8/8/8/8/8/3P1P2/3RKB2 w - - 0 1");
    assert!(board.is_in_check(Color::White));
    assert!(!board.is_checkmate(Color::White));
    let moves = board.all_legal_moves(Color::White, CastlingRights::none());
    assert_eq!(moves, vec![Move::new(sq("f1"), sq("e2"))]);
}

#[test]
fn test_stalemate_lone_king() {
    let board = board("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert!(!board.is_in_check(Color::Black));
    assert!(board.is_stalemate(Color::Black));
    assert!(!board.is_checkmate(Color::Black));
}

#[test]
fn test_stalemate_classic_corner() {
    let board = board("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!board.is_checkmate(Color::Black));
    assert!(board.is_stalemate(Color::Black));
}

#[test]
fn test_pinned_piece_stays_on_the_pin_line() {
    // Rook on e4 is pinned against the king by the queen on e8.
    let board = board("4q2k/8/8/8/4R3/8/8/4K3 w - - 0 1");
    let moves = board.legal_moves(sq("e4"), Color::White, CastlingRights::none());
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.to.col() == 4));
    assert!(moves.contains(&Move::new(sq("e4"), sq("e8"))));
}

#[test]
fn test_pinned_knight_cannot_move() {
    let board = board("4r2k/8/8/8/4N3/8/8/4K3 w - - 0 1");
    assert!(board
        .legal_moves(sq("e4"), Color::White, CastlingRights::none())
        .is_empty());
}

#[test]
fn test_king_cannot_capture_defended_piece() {
    // The rook on d2 is defended by the rook on d8.
    let board = board("3r3k/8/8/8/8/8/3r4/4K3 w - - 0 1");
    let moves = board.legal_moves(sq("e1"), Color::White, CastlingRights::none());
    assert!(!moves.iter().any(|m| m.to == sq("d2")));
    assert!(!moves.iter().any(|m| m.to == sq("d1")));
    assert!(moves.contains(&Move::new(sq("e1"), sq("f1"))));
}

#[test]
fn test_king_cannot_step_into_pawn_attack() {
    let board = board("7k/8/8/8/8/3p4/8/4K3 w - - 0 1");
    let moves = board.legal_moves(sq("e1"), Color::White, CastlingRights::none());
    assert!(!moves.iter().any(|m| m.to == sq("e2")));
    assert!(!moves.iter().any(|m| m.to == sq("c2")));
    assert!(moves.contains(&Move::new(sq("e1"), sq("d2"))));
}

#[test]
fn test_pawn_double_push_needs_both_squares_empty() {
    let board = board("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
    assert!(board
        .legal_moves(sq("e2"), Color::White, CastlingRights::none())
        .is_empty());

    let board = self::board("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
    let moves = board.legal_moves(sq("e2"), Color::White, CastlingRights::none());
    assert_eq!(moves, vec![Move::new(sq("e2"), sq("e3"))]);
}

#[test]
fn test_pawn_captures_only_enemy_pieces() {
    let board = board("4k3/8/8/8/8/3p1N2/4P3/4K3 w - - 0 1");
    let moves = board.legal_moves(sq("e2"), Color::White, CastlingRights::none());
    assert!(moves.contains(&Move::new(sq("e2"), sq("d3"))));
    assert!(!moves.contains(&Move::new(sq("e2"), sq("f3"))));
    assert_eq!(moves.len(), 3);
}

#[test]
fn test_black_pawns_move_down_the_board() {
    let board = Board::initial();
    let moves = board.legal_moves(sq("d7"), Color::Black, CastlingRights::new());
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&Move::new(sq("d7"), sq("d5"))));
}

#[test]
fn test_slider_ray_stops_at_first_piece() {
    let board = board("4k3/8/8/8/1p6/8/8/R3K3 w - - 0 1");
    let moves = board.pseudo_legal_moves(
        sq("a1"),
        Color::White,
        CastlingRights::none(),
        GenMode::Normal,
    );
    // a2..a8 (7) plus b1, c1, d1 (3); e1 holds the own king.
    assert_eq!(moves.len(), 10);
    assert!(moves.contains(&Move::new(sq("a1"), sq("a8"))));
}

#[test]
fn test_queen_in_open_center() {
    let board = board("k7/8/8/8/3Q4/8/8/7K w - - 0 1");
    let moves = board.legal_moves(sq("d4"), Color::White, CastlingRights::none());
    assert_eq!(moves.len(), 27);
}

#[test]
fn test_legal_moves_never_leave_king_attacked() {
    for fen in [
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
    ] {
        let (board, side, rights) = Board::try_from_fen(fen).unwrap();
        for mv in board.all_legal_moves(side, rights) {
            let (next, _) = board.apply_move(mv.from, mv.to, mv.promotion);
            assert!(!next.is_in_check(side), "{mv} leaves king attacked in {fen}");
        }
    }
}
