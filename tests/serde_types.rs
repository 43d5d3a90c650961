#![cfg(feature = "serde")]

use chess_rules::{CastlingRights, Color, GameStatus, Move, Piece, Square};

#[test]
fn move_serializes_with_named_fields() {
    let mv = Move::with_promotion(Square(1, 0), Square(0, 0), Piece::Knight);
    let json = serde_json::to_string(&mv).unwrap();
    assert_eq!(json, r#"{"from":[1,0],"to":[0,0],"promotion":"Knight"}"#);
    let back: Move = serde_json::from_str(&json).unwrap();
    assert_eq!(back, mv);
}

#[test]
fn status_and_color_are_unit_variants() {
    assert_eq!(
        serde_json::to_string(&GameStatus::Checkmate).unwrap(),
        r#""Checkmate""#
    );
    assert_eq!(serde_json::to_string(&Color::Black).unwrap(), r#""Black""#);
}

#[test]
fn castling_rights_survive_json() {
    let mut rights = CastlingRights::new();
    rights.mark_king_moved(Color::Black);
    let json = serde_json::to_string(&rights).unwrap();
    let back: CastlingRights = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rights);
    assert_eq!(back.to_fen_token(), "KQ");
}
