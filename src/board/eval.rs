//! Static evaluation: material, mobility, center control, king safety.
//!
//! Scores are White-positive centipawns and a pure function of board
//! state. All terms are strictly additive; nothing branches away from the
//! material computation.

use super::{Board, Color, Square};

/// The four central squares d4, e4, d5, e5
const CENTER_SQUARES: [Square; 4] = [Square(3, 3), Square(3, 4), Square(4, 3), Square(4, 4)];

/// The twelve squares ringing the center
const EXTENDED_CENTER: [Square; 12] = [
    Square(2, 2),
    Square(2, 3),
    Square(2, 4),
    Square(2, 5),
    Square(3, 2),
    Square(3, 5),
    Square(4, 2),
    Square(4, 5),
    Square(5, 2),
    Square(5, 3),
    Square(5, 4),
    Square(5, 5),
];

/// Tunable evaluation weights.
///
/// The relative weighting of the positional terms, king safety in
/// particular, is configuration rather than protocol; the defaults keep
/// mobility and center influence well below a pawn so material dominates.
#[derive(Clone, Copy, Debug)]
pub struct EvalWeights {
    /// Multiplier for the legal-move count difference
    pub mobility: i32,
    /// Multiplier for the center-control score difference
    pub center: i32,
    /// Multiplier for the king-safety score difference
    pub king_safety: i32,
    /// Raw penalty for being in check (before the king-safety multiplier)
    pub check_penalty: i32,
    /// Raw bonus per friendly piece adjacent to the king
    pub shield_bonus: i32,
    /// Raw penalty for a king advanced past the middle of the board
    pub forwardness_penalty: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            mobility: 2,
            center: 3,
            king_safety: 5,
            check_penalty: 50,
            shield_bonus: 5,
            forwardness_penalty: 10,
        }
    }
}

impl Board {
    /// Evaluate the position with default weights. Positive favors White.
    #[must_use]
    pub fn evaluate(&mut self) -> i32 {
        self.evaluate_with(&EvalWeights::default())
    }

    /// Evaluate the position with the given weights. Positive favors
    /// White.
    ///
    /// Mobility counts legal moves, and legality is simulate-and-revert,
    /// so this takes `&mut self`; the board is restored exactly before
    /// returning.
    #[must_use]
    pub fn evaluate_with(&mut self, weights: &EvalWeights) -> i32 {
        let mut score = self.material_score();

        let white_mobility = self.legal_moves(Color::White).len() as i32;
        let black_mobility = self.legal_moves(Color::Black).len() as i32;
        score += weights.mobility * (white_mobility - black_mobility);

        score += weights.center
            * (self.center_control(Color::White) - self.center_control(Color::Black));

        score += weights.king_safety
            * (self.king_safety(Color::White, weights) - self.king_safety(Color::Black, weights));

        score
    }

    /// Signed material sum over all pieces
    fn material_score(&self) -> i32 {
        self.occupied_squares()
            .map(|(_, color, piece)| color.sign() * piece.value())
            .sum()
    }

    /// Center-control score for one color: occupancy of the center (x2),
    /// occupancy of the extended center (x1), and +1 per piece with a
    /// pseudo-legal move into a central square
    fn center_control(&self, color: Color) -> i32 {
        let mut score = 0;

        for sq in CENTER_SQUARES {
            if self.color_on(sq) == Some(color) {
                score += 2;
            }
        }
        for sq in EXTENDED_CENTER {
            if self.color_on(sq) == Some(color) {
                score += 1;
            }
        }

        let mut credited = [false; 64];
        for mv in &self.pseudo_legal_moves(color) {
            if CENTER_SQUARES.contains(&mv.to) && !credited[mv.from.as_index()] {
                credited[mv.from.as_index()] = true;
                score += 1;
            }
        }

        score
    }

    /// King-safety score for one color: higher is safer
    fn king_safety(&self, color: Color, weights: &EvalWeights) -> i32 {
        let king = self.king_square(color);
        let mut score = 0;

        if self.in_check(color) {
            score -= weights.check_penalty;
        }

        for dr in [-1isize, 0, 1] {
            for df in [-1isize, 0, 1] {
                if dr == 0 && df == 0 {
                    continue;
                }
                if let Some(sq) = king.offset(dr, df) {
                    if self.color_on(sq) == Some(color) {
                        score += weights.shield_bonus;
                    }
                }
            }
        }

        // A king past the middle of the board has left its shelter.
        let advanced = match color {
            Color::White => king.rank() > 3,
            Color::Black => king.rank() < 4,
        };
        if advanced {
            score -= weights.forwardness_penalty;
        }

        score
    }
}
