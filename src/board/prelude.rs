//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use woodpusher::board::prelude::*;
//! ```

pub use super::{
    find_best_move, find_best_move_with, Board, BoardBuilder, Color, EvalWeights, FenError,
    GameStatus, IllegalMoveError, Move, MoveList, Piece, SearchResult, Square, SquareError,
};
