//! Chess board representation and game logic.
//!
//! An 8x8 mailbox board with simulate-and-revert legality filtering,
//! a hand-crafted evaluator, and negamax alpha-beta search. Castling,
//! en passant, and promotion are outside this model; the pawn double step
//! is in.
//!
//! # Example
//! ```
//! use woodpusher::board::{find_best_move, Board, Color};
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//!
//! let result = find_best_move(&mut board, Color::White, 2);
//! assert!(result.best_move.is_some());
//! ```

mod attack_tables;
mod builder;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod perft;
pub mod prelude;
mod search;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, IllegalMoveError, SquareError};
pub use make_unmake::UnmakeInfo;
pub use state::Board;
pub use status::GameStatus;
pub use types::{Color, Move, MoveList, MoveListIntoIter, Piece, Square};

// Public API - evaluation and search
pub use eval::EvalWeights;
pub use search::{
    find_best_move, find_best_move_with, SearchInfo, SearchLogger, SearchResult, StdoutLogger,
};
