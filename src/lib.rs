pub mod board;

pub use board::{find_best_move, Board, Color, GameStatus, Move, Piece, SearchResult, Square};
