//! Game status classification: check, checkmate, stalemate, or ongoing.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color};

/// Derived game state for the side to move. Never stored on the board;
/// recomputed on demand from check state and legal-move availability.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    Check(Color),
    Checkmate(Color),
    Stalemate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Check(color) => write!(f, "{color} is in check"),
            GameStatus::Checkmate(color) => write!(f, "{color} is checkmated"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Board {
    /// Classify the current position for the side to move
    #[must_use]
    pub fn status(&mut self) -> GameStatus {
        let side = self.side_to_move;
        let in_check = self.in_check(side);
        let has_moves = !self.legal_moves(side).is_empty();
        match (in_check, has_moves) {
            (true, false) => GameStatus::Checkmate(side),
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check(side),
            (false, true) => GameStatus::InProgress,
        }
    }

    /// Is the side to move checkmated?
    #[must_use]
    pub fn is_checkmate(&mut self) -> bool {
        matches!(self.status(), GameStatus::Checkmate(_))
    }

    /// Is the side to move stalemated?
    #[must_use]
    pub fn is_stalemate(&mut self) -> bool {
        self.status() == GameStatus::Stalemate
    }
}
