//! Core value types: pieces, colors, squares, moves.

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;
