//! Board state: an 8x8 mailbox of optional pieces plus the side to move.

use std::fmt;

use super::{Color, Piece, Square};

/// The board aggregate: piece placement and side to move.
///
/// The board owns its squares exclusively; pieces are plain values with no
/// identity beyond type, color, and position. Legality checking lives in
/// the move generator, not here.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    // squares[rank][file], rank 0 = White's back rank
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8],
    pub(crate) side_to_move: Color,
}

impl Board {
    /// Create a board in the standard starting position
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, file), Color::White, *piece);
            board.set_piece(Square(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square(6, file), Color::Black, Piece::Pawn);
            board.set_piece(Square(7, file), Color::Black, *piece);
        }
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
        }
    }

    /// The color whose turn it is
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Get the piece and its color on a square. Pure lookup; never fails
    /// for an on-board square (and `Square` cannot name an off-board one).
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.rank()][sq.file()]
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.rank()][sq.file()] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn clear_square(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.rank()][sq.file()].take()
    }

    /// Find the king of the given color, scanning a1..h8
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        for rank in 0..8 {
            for file in 0..8 {
                if self.squares[rank][file] == Some((color, Piece::King)) {
                    return Some(Square(rank, file));
                }
            }
        }
        None
    }

    /// King square, required. A missing king is an internal invariant
    /// violation, so this aborts instead of limping on with a bad answer.
    pub(crate) fn king_square(&self, color: Color) -> Square {
        match self.find_king(color) {
            Some(sq) => sq,
            None => panic!("inconsistent board: no {color} king present"),
        }
    }

    /// Iterate over all occupied squares as (square, color, piece),
    /// in a1..h8 order
    pub(crate) fn occupied_squares(
        &self,
    ) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        (0..64).filter_map(move |idx| {
            let sq = Square::from_index(idx);
            self.piece_at(sq).map(|(color, piece)| (sq, color, piece))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    /// ASCII diagram with rank 8 at the top, FEN piece letters, '.' for
    /// empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                match self.squares[rank][file] {
                    Some((color, piece)) => write!(f, "{} ", piece.to_fen_char(color))?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "{}", rank + 1)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
