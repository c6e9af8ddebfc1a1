//! Knight move generation from the precomputed target table.

use super::super::attack_tables::KNIGHT_TARGETS;
use super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    pub(crate) fn knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in &KNIGHT_TARGETS[from.as_index()] {
            match self.piece_at(to) {
                None => moves.push(Move::quiet(from, to, Piece::Knight)),
                Some((target_color, victim)) if target_color != color => {
                    moves.push(Move::capture(from, to, Piece::Knight, victim));
                }
                Some(_) => {}
            }
        }
    }
}
