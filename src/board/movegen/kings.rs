//! King move generation from the precomputed target table. No castling.

use super::super::attack_tables::KING_TARGETS;
use super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    pub(crate) fn king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in &KING_TARGETS[from.as_index()] {
            match self.piece_at(to) {
                None => moves.push(Move::quiet(from, to, Piece::King)),
                Some((target_color, victim)) if target_color != color => {
                    moves.push(Move::capture(from, to, Piece::King, victim));
                }
                Some(_) => {}
            }
        }
    }
}
