//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Move generation and legality filtering
//! - `make_unmake.rs` - Apply/revert correctness and move validation
//! - `status.rs` - Check, checkmate, and stalemate classification
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Alpha-beta search behavior
//! - `proptest.rs` - Property-based tests

mod make_unmake;
mod movegen;
mod proptest;

use crate::board::{Board, Move, Square};

/// Find the generated move from `from` to `to`, panicking if absent
pub(crate) fn find_move(board: &mut Board, from: Square, to: Square) -> Move {
    for &m in &board.generate_moves() {
        if m.from == from && m.to == to {
            return m;
        }
    }
    panic!("Expected move {from}{to} not found");
}

/// Parse a FEN that tests rely on being valid
pub(crate) fn board_from_fen(fen: &str) -> Board {
    Board::from_fen(fen).expect("test FEN must parse")
}
