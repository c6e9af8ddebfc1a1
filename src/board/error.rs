//! Error types for chess board operations.

use std::fmt;

use super::types::{Move, Square};

/// Error type for invalid square coordinates or notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank index out of the 0-7 range
    RankOutOfBounds { rank: usize },
    /// File index out of the 0-7 range
    FileOutOfBounds { file: usize },
    /// Algebraic notation that does not name a square (expected e.g. "e4")
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for rejected move applications.
///
/// Returned by [`Board::try_make_move`](super::Board::try_make_move), which
/// re-validates a caller-supplied move before mutating anything. The
/// unchecked [`Board::make_move`](super::Board::make_move) never produces
/// this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalMoveError {
    /// The from-square holds no piece
    EmptySquare { from: Square },
    /// The from-square holds a piece of the side not to move
    WrongColor { from: Square },
    /// The move is not in the legal move list for the current position
    NotLegal { mv: Move },
}

impl fmt::Display for IllegalMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveError::EmptySquare { from } => {
                write!(f, "No piece on {from}")
            }
            IllegalMoveError::WrongColor { from } => {
                write!(f, "Piece on {from} does not belong to the side to move")
            }
            IllegalMoveError::NotLegal { mv } => {
                write!(f, "Move {mv} is not legal in the current position")
            }
        }
    }
}

impl std::error::Error for IllegalMoveError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs placement and side to move)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Placement string does not describe exactly 8 ranks
    BadRankCount { found: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 2 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::BadRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
        }
    }
}

impl std::error::Error for FenError {}
