//! Move generation tests.

use std::str::FromStr;

use super::board_from_fen;
use crate::board::{Board, BoardBuilder, Color, Move, Piece, Square};

#[test]
fn test_starting_position_has_twenty_moves() {
    let mut board = Board::new();
    assert_eq!(board.generate_moves().len(), 20);
    assert_eq!(board.legal_moves(Color::Black).len(), 20);
}

#[test]
fn test_perft_from_start() {
    let mut board = Board::new();
    assert_eq!(board.perft(1), 20);
    assert_eq!(board.perft(2), 400);
    // Castling, en passant, and promotion contribute nothing before
    // depth 4, so this matches the standard perft value.
    assert_eq!(board.perft(3), 8902);
}

#[test]
fn test_generation_order_is_deterministic() {
    let mut board = Board::new();
    let first: Vec<Move> = board.generate_moves().into_iter().collect();
    let second: Vec<Move> = board.generate_moves().into_iter().collect();
    assert_eq!(first, second);
}

#[test]
fn test_knight_in_corner_has_two_moves() {
    let mut board = BoardBuilder::new()
        .piece(Square(0, 0), Color::White, Piece::Knight)
        .piece(Square(4, 4), Color::White, Piece::King)
        .piece(Square(7, 7), Color::Black, Piece::King)
        .build();
    let knight_moves: Vec<Move> = board
        .legal_moves(Color::White)
        .into_iter()
        .filter(|m| m.piece == Piece::Knight)
        .collect();
    assert_eq!(knight_moves.len(), 2);
}

#[test]
fn test_pinned_knight_cannot_move() {
    // Black rook on e8 pins the e2 knight against the e1 king.
    let mut board = board_from_fen("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1");
    let knight_moves: Vec<Move> = board
        .legal_moves(Color::White)
        .into_iter()
        .filter(|m| m.piece == Piece::Knight)
        .collect();
    assert!(knight_moves.is_empty(), "pinned knight moved: {knight_moves:?}");
}

#[test]
fn test_blocked_pawn_cannot_advance() {
    // White pawn e4 blocked by a black pawn on e5.
    let mut board = board_from_fen("4k3/8/8/4p3/4P3/8/8/4K3 w - - 0 1");
    let e4 = Square::from_str("e4").unwrap();
    let pawn_moves: Vec<Move> = board
        .legal_moves(Color::White)
        .into_iter()
        .filter(|m| m.from == e4)
        .collect();
    assert!(pawn_moves.is_empty());
}

#[test]
fn test_pawn_double_step_only_from_start_rank() {
    let mut board = Board::new();
    let e2 = Square::from_str("e2").unwrap();
    let e3 = Square::from_str("e3").unwrap();
    let e4 = Square::from_str("e4").unwrap();
    let moves = board.generate_moves();
    assert!(moves.contains(Move::quiet(e2, e3, Piece::Pawn)));
    assert!(moves.contains(Move::quiet(e2, e4, Piece::Pawn)));

    // After advancing to e3 the pawn only has the single step left.
    let mv = Move::quiet(e2, e3, Piece::Pawn);
    board.make_move(mv);
    board.make_move(Move::quiet(
        Square::from_str("a7").unwrap(),
        Square::from_str("a6").unwrap(),
        Piece::Pawn,
    ));
    let moves = board.generate_moves();
    assert!(moves.contains(Move::quiet(e3, e4, Piece::Pawn)));
    assert!(!moves.contains(Move::quiet(e3, Square::from_str("e5").unwrap(), Piece::Pawn)));
}

#[test]
fn test_pawn_double_step_blocked_by_piece_in_between() {
    // Black knight on e3 blocks both e2-e3 and e2-e4.
    let mut board = board_from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
    let e2 = Square::from_str("e2").unwrap();
    let forward: Vec<Move> = board
        .legal_moves(Color::White)
        .into_iter()
        .filter(|m| m.from == e2 && !m.is_capture())
        .collect();
    assert!(forward.is_empty());
}

#[test]
fn test_no_en_passant_capture() {
    // White pawn e5; black just played d7-d5. En passant is not in the
    // model, so exd6 must not be generated.
    let mut board = board_from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    let e5 = Square::from_str("e5").unwrap();
    let d6 = Square::from_str("d6").unwrap();
    let moves = board.legal_moves(Color::White);
    assert!(!moves.into_iter().any(|m| m.from == e5 && m.to == d6));
}

#[test]
fn test_pawn_never_moves_onto_last_rank() {
    // White pawn on a7 with a black rook on b8: neither the push to a8
    // nor the capture on b8 is generated (promotion is not modelled).
    let mut board = board_from_fen("1r6/P3k3/8/8/8/8/8/4K3 w - - 0 1");
    let a7 = Square::from_str("a7").unwrap();
    let pawn_moves: Vec<Move> = board
        .legal_moves(Color::White)
        .into_iter()
        .filter(|m| m.from == a7)
        .collect();
    assert!(pawn_moves.is_empty(), "pawn left its seventh rank: {pawn_moves:?}");
}

#[test]
fn test_pawn_captures_diagonally() {
    let mut board = board_from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1");
    let e4 = Square::from_str("e4").unwrap();
    let d5 = Square::from_str("d5").unwrap();
    let moves = board.legal_moves(Color::White);
    assert!(moves.contains(Move::capture(e4, d5, Piece::Pawn, Piece::Pawn)));
}

#[test]
fn test_sliders_stop_at_blockers() {
    // White rook a1 with a white pawn on a3: the rook gets a2 and the
    // first rank, never a3 or beyond.
    let mut board = board_from_fen("4k3/8/8/8/8/P7/8/R3K3 w - - 0 1");
    let a1 = Square::from_str("a1").unwrap();
    let rook_targets: Vec<Square> = board
        .legal_moves(Color::White)
        .into_iter()
        .filter(|m| m.from == a1)
        .map(|m| m.to)
        .collect();
    assert!(rook_targets.contains(&Square::from_str("a2").unwrap()));
    assert!(!rook_targets.contains(&Square::from_str("a3").unwrap()));
    assert!(!rook_targets.contains(&Square::from_str("a4").unwrap()));
}

#[test]
fn test_kings_may_not_touch() {
    let mut board = BoardBuilder::new()
        .piece(Square(4, 4), Color::White, Piece::King)
        .piece(Square(4, 6), Color::Black, Piece::King)
        .build();
    let targets: Vec<Square> = board
        .legal_moves(Color::White)
        .into_iter()
        .map(|m| m.to)
        .collect();
    // f4, f5, f6 are adjacent to the black king on g5's neighborhood.
    assert!(!targets.contains(&Square(3, 5)));
    assert!(!targets.contains(&Square(4, 5)));
    assert!(!targets.contains(&Square(5, 5)));
}

#[test]
fn test_moves_never_leave_own_king_in_check() {
    // White king on e1 attacked by a rook on e8; every legal move must
    // resolve the check.
    let mut board = board_from_fen("4r2k/8/8/8/8/8/3Q4/4K3 w - - 0 1");
    assert!(board.in_check(Color::White));
    let moves = board.legal_moves(Color::White);
    assert!(!moves.is_empty());
    for &mv in &moves {
        let info = board.make_move(mv);
        assert!(!board.in_check(Color::White), "move {mv} leaves king in check");
        board.unmake_move(mv, info);
    }
}

#[test]
fn test_is_square_attacked_patterns() {
    let board = board_from_fen("4k3/8/8/8/2n5/8/1P6/4K2R w - - 0 1");
    // Pawn b2 attacks a3 and c3.
    assert!(board.is_square_attacked(Square::from_str("a3").unwrap(), Color::White));
    assert!(board.is_square_attacked(Square::from_str("c3").unwrap(), Color::White));
    assert!(!board.is_square_attacked(Square::from_str("b3").unwrap(), Color::White));
    // Knight c4 attacks e3 and d2.
    assert!(board.is_square_attacked(Square::from_str("e3").unwrap(), Color::Black));
    assert!(board.is_square_attacked(Square::from_str("d2").unwrap(), Color::Black));
    // Rook h1 attacks along the h-file and first rank.
    assert!(board.is_square_attacked(Square::from_str("h8").unwrap(), Color::White));
    assert!(board.is_square_attacked(Square::from_str("f1").unwrap(), Color::White));
}

#[test]
fn test_empty_color_contributes_no_moves() {
    let mut board = BoardBuilder::new()
        .piece(Square(0, 4), Color::White, Piece::King)
        .piece(Square(7, 4), Color::Black, Piece::King)
        .build();
    // Only the kings exist; both sides still have king moves, but a
    // color with no pieces on scanned squares adds nothing extra.
    assert_eq!(
        board.legal_moves(Color::White).len(),
        board.legal_moves(Color::Black).len()
    );
}
