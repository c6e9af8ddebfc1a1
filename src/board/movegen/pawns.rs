//! Pawn move generation.
//!
//! Single push, double push from the start rank, and diagonal captures.
//! No en passant, and no move is ever generated onto the final rank
//! (promotion is outside this model, so a pawn on its seventh rank simply
//! cannot advance).

use super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    pub(crate) fn pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let last_rank = color.pawn_last_rank();

        if let Some(one) = from.offset(dir, 0) {
            if one.rank() != last_rank && self.piece_at(one).is_none() {
                moves.push(Move::quiet(from, one, Piece::Pawn));

                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.piece_at(two).is_none() {
                            moves.push(Move::quiet(from, two, Piece::Pawn));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            if let Some(to) = from.offset(dir, df) {
                if to.rank() == last_rank {
                    continue;
                }
                if let Some((target_color, victim)) = self.piece_at(to) {
                    if target_color != color {
                        moves.push(Move::capture(from, to, Piece::Pawn, victim));
                    }
                }
            }
        }
    }
}
