//! Move generation and the legality filter.
//!
//! Generation is two-phase: per-piece pseudo-legal moves (movement pattern
//! and blocking only), then a simulate-and-revert filter that discards any
//! move leaving the mover's own king attacked. The candidate order is
//! deterministic: from-squares scanned a1..h8, destinations in fixed
//! per-piece delta order. Search reproducibility depends on this.
//!
//! Special moves are not modelled: no castling, no en passant, no
//! promotion. Pawns do get their double step from the start rank, and a
//! pawn is never given a move onto its final rank.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{KING_TARGETS, KNIGHT_TARGETS};
use super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Generate all legal moves for the side to move
    pub fn generate_moves(&mut self) -> MoveList {
        self.legal_moves(self.side_to_move)
    }

    /// Generate all legal moves for the given color.
    ///
    /// A position with no legal moves yields an empty list, not an error;
    /// checkmate-vs-stalemate interpretation belongs to
    /// [`Board::status`](super::Board::status).
    pub fn legal_moves(&mut self, color: Color) -> MoveList {
        let pseudo = self.pseudo_legal_moves(color);
        let mut legal = MoveList::new();
        for &mv in &pseudo {
            if !self.leaves_king_in_check(mv, color) {
                legal.push(mv);
            }
        }
        legal
    }

    /// Generate pseudo-legal moves for the given color: movement patterns
    /// and blocking rules only, king safety not yet considered
    pub(crate) fn pseudo_legal_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (from, piece_color, piece) in self.occupied_squares() {
            if piece_color == color {
                self.piece_moves(from, color, piece, &mut moves);
            }
        }
        moves
    }

    pub(crate) fn piece_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        moves: &mut MoveList,
    ) {
        match piece {
            Piece::Pawn => self.pawn_moves(from, color, moves),
            Piece::Knight => self.knight_moves(from, color, moves),
            Piece::Bishop => self.sliding_moves(from, color, piece, sliders::BISHOP_DIRECTIONS, moves),
            Piece::Rook => self.sliding_moves(from, color, piece, sliders::ROOK_DIRECTIONS, moves),
            Piece::Queen => self.sliding_moves(from, color, piece, sliders::QUEEN_DIRECTIONS, moves),
            Piece::King => self.king_moves(from, color, moves),
        }
    }

    /// Simulate the move, test whether `color`'s king is attacked, revert
    fn leaves_king_in_check(&mut self, mv: Move, color: Color) -> bool {
        let info = self.make_move(mv);
        let in_check = self.in_check(color);
        self.unmake_move(mv, info);
        in_check
    }

    /// Is the king of the given color currently attacked?
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        let king = self.king_square(color);
        self.is_square_attacked(king, color.opponent())
    }

    /// Is `sq` attacked by any piece of color `by`?
    ///
    /// Direct scan over attack patterns: equivalent to asking whether some
    /// pseudo-legal move of `by` lands on `sq`, but with no board mutation
    /// and no recursion into the attacker's own king safety.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        // Pawns attack diagonally forward, so look one rank back along
        // the attacker's direction of travel.
        let dir = by.pawn_direction();
        for df in [-1, 1] {
            if let Some(origin) = sq.offset(-dir, df) {
                if self.piece_at(origin) == Some((by, Piece::Pawn)) {
                    return true;
                }
            }
        }

        for &origin in &KNIGHT_TARGETS[sq.as_index()] {
            if self.piece_at(origin) == Some((by, Piece::Knight)) {
                return true;
            }
        }

        for &origin in &KING_TARGETS[sq.as_index()] {
            if self.piece_at(origin) == Some((by, Piece::King)) {
                return true;
            }
        }

        // Sliders: walk each ray out of `sq`; the first piece found
        // decides whether the ray is an attack.
        for &(dr, df) in &sliders::QUEEN_DIRECTIONS {
            let diagonal = dr != 0 && df != 0;
            let mut current = sq;
            while let Some(next) = current.offset(dr, df) {
                current = next;
                match self.piece_at(current) {
                    None => continue,
                    Some((color, piece)) => {
                        if color == by
                            && (diagonal && piece.attacks_diagonally()
                                || !diagonal && piece.attacks_straight())
                        {
                            return true;
                        }
                        break;
                    }
                }
            }
        }

        false
    }
}
