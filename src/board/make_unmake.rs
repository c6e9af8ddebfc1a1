//! Applying and reverting moves.
//!
//! `make_move` is a mechanical primitive: it moves the piece, removes any
//! capture victim, and flips the side to move. It does no legality
//! checking and will happily leave the mover's own king in check; the move
//! generator owns legality. `try_make_move` is the validated entry for
//! untrusted callers.

use super::error::IllegalMoveError;
use super::{Board, Move};

/// Opaque token holding what `make_move` destroyed, sufficient to exactly
/// reverse that single move.
///
/// Tokens must be consumed by `unmake_move` in strict reverse order of the
/// `make_move` calls that produced them (stack discipline).
#[derive(Clone, Debug)]
pub struct UnmakeInfo {
    pub(crate) captured: Option<(super::Color, super::Piece)>,
}

impl Board {
    /// Apply a move without validation and flip the side to move.
    ///
    /// Returns the undo token for [`Board::unmake_move`].
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        let moving = self.clear_square(mv.from);
        debug_assert!(
            matches!(moving, Some((_, piece)) if piece == mv.piece),
            "make_move: {} does not hold a {}",
            mv.from,
            mv.piece
        );
        let captured = self.squares[mv.to.rank()][mv.to.file()];
        self.squares[mv.to.rank()][mv.to.file()] = moving;
        self.side_to_move = self.side_to_move.opponent();
        UnmakeInfo { captured }
    }

    /// Exactly reverse a `make_move`, restoring placement and side to move
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        let moving = self.squares[mv.to.rank()][mv.to.file()];
        self.squares[mv.to.rank()][mv.to.file()] = info.captured;
        self.squares[mv.from.rank()][mv.from.file()] = moving;
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Apply a move after re-validating it against the current legal move
    /// list.
    ///
    /// Front ends are expected to offer only legal moves; this is the
    /// defense-in-depth boundary that refuses anything else without
    /// mutating the board.
    ///
    /// # Errors
    ///
    /// [`IllegalMoveError`] if the from-square is empty, holds a piece of
    /// the side not to move, or the move is absent from the legal move
    /// list.
    pub fn try_make_move(&mut self, mv: Move) -> Result<UnmakeInfo, IllegalMoveError> {
        match self.piece_at(mv.from) {
            None => return Err(IllegalMoveError::EmptySquare { from: mv.from }),
            Some((color, _)) if color != self.side_to_move => {
                return Err(IllegalMoveError::WrongColor { from: mv.from })
            }
            Some(_) => {}
        }
        if !self.generate_moves().contains(mv) {
            return Err(IllegalMoveError::NotLegal { mv });
        }
        Ok(self.make_move(mv))
    }
}
