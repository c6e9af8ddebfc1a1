//! Sliding move generation for bishops, rooks, and queens.

use super::{Board, Color, Move, MoveList, Piece, Square};

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// Walk each direction until blocked: stop before an own piece,
    /// include the capture of an enemy piece, stop after.
    pub(crate) fn sliding_moves<const N: usize>(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        directions: [(isize, isize); N],
        moves: &mut MoveList,
    ) {
        for (dr, df) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, df) {
                current = to;
                match self.piece_at(to) {
                    None => moves.push(Move::quiet(from, to, piece)),
                    Some((target_color, victim)) => {
                        if target_color != color {
                            moves.push(Move::capture(from, to, piece, victim));
                        }
                        break;
                    }
                }
            }
        }
    }
}
