//! Apply/revert tests.

use std::str::FromStr;

use super::{board_from_fen, find_move};
use crate::board::{Board, Color, IllegalMoveError, Move, Piece, Square, UnmakeInfo};

#[test]
fn test_make_unmake_restores_board_exactly() {
    let mut board = Board::new();
    let before = board.clone();
    let mv = find_move(
        &mut board,
        Square::from_str("e2").unwrap(),
        Square::from_str("e4").unwrap(),
    );
    let info = board.make_move(mv);
    assert_ne!(board, before);
    board.unmake_move(mv, info);
    assert_eq!(board, before);
    assert_eq!(board.to_fen(), before.to_fen());
}

#[test]
fn test_make_move_flips_side_to_move() {
    let mut board = Board::new();
    assert_eq!(board.side_to_move(), Color::White);
    let mv = find_move(
        &mut board,
        Square::from_str("g1").unwrap(),
        Square::from_str("f3").unwrap(),
    );
    let info = board.make_move(mv);
    assert_eq!(board.side_to_move(), Color::Black);
    board.unmake_move(mv, info);
    assert_eq!(board.side_to_move(), Color::White);
}

#[test]
fn test_capture_make_unmake_restores_victim() {
    let mut board = board_from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1");
    let d5 = Square::from_str("d5").unwrap();
    let e4 = Square::from_str("e4").unwrap();
    let before = board.clone();

    let mv = find_move(&mut board, e4, d5);
    assert_eq!(mv.captured, Some(Piece::Pawn));

    let info = board.make_move(mv);
    assert_eq!(board.piece_at(d5), Some((Color::White, Piece::Pawn)));
    assert_eq!(board.piece_at(e4), None);

    board.unmake_move(mv, info);
    assert_eq!(board, before);
}

#[test]
fn test_move_sequence_reverts_in_reverse_order() {
    let mut board = Board::new();
    let before = board.clone();
    let mut history: Vec<(Move, UnmakeInfo)> = Vec::new();

    for _ in 0..6 {
        let mv = board.generate_moves().first().expect("moves available");
        let info = board.make_move(mv);
        history.push((mv, info));
    }

    while let Some((mv, info)) = history.pop() {
        board.unmake_move(mv, info);
    }
    assert_eq!(board, before);
}

#[test]
fn test_try_make_move_accepts_legal_move() {
    let mut board = Board::new();
    let mv = find_move(
        &mut board,
        Square::from_str("d2").unwrap(),
        Square::from_str("d4").unwrap(),
    );
    let info = board.try_make_move(mv).expect("legal move accepted");
    assert_eq!(board.side_to_move(), Color::Black);
    board.unmake_move(mv, info);
}

#[test]
fn test_try_make_move_rejects_illegal_move_without_mutation() {
    let mut board = Board::new();
    let before = board.clone();
    let mv = Move::quiet(
        Square::from_str("e2").unwrap(),
        Square::from_str("e5").unwrap(),
        Piece::Pawn,
    );
    let err = board.try_make_move(mv).unwrap_err();
    assert_eq!(err, IllegalMoveError::NotLegal { mv });
    assert_eq!(board, before);
}

#[test]
fn test_try_make_move_rejects_empty_square() {
    let mut board = Board::new();
    let from = Square::from_str("e4").unwrap();
    let mv = Move::quiet(from, Square::from_str("e5").unwrap(), Piece::Pawn);
    assert_eq!(
        board.try_make_move(mv).unwrap_err(),
        IllegalMoveError::EmptySquare { from }
    );
}

#[test]
fn test_try_make_move_rejects_wrong_color() {
    let mut board = Board::new();
    let from = Square::from_str("e7").unwrap();
    let mv = Move::quiet(from, Square::from_str("e6").unwrap(), Piece::Pawn);
    assert_eq!(
        board.try_make_move(mv).unwrap_err(),
        IllegalMoveError::WrongColor { from }
    );
}

#[test]
fn test_square_rejects_off_board_addresses() {
    assert!(Square::new(8, 0).is_none());
    assert!(Square::new(0, 8).is_none());
    assert!(Square::try_from((9, 3)).is_err());
    assert!(Square::from_str("i1").is_err());
    assert!(Square::from_str("a9").is_err());
    assert_eq!(Square::from_str("e4").unwrap(), Square(3, 4));
}

#[test]
fn test_fen_round_trip() {
    let board = Board::new();
    assert_eq!(
        board.to_fen(),
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"
    );
    let parsed = board_from_fen(&board.to_fen());
    assert_eq!(parsed, board);

    let mid = board_from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 2 3");
    let round = board_from_fen(&mid.to_fen());
    assert_eq!(round, mid);
    assert_eq!(mid.side_to_move(), Color::Black);
}
