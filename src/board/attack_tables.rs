//! Precomputed target tables for leaper pieces (knights and kings).

use once_cell::sync::Lazy;

use super::Square;

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

fn build_targets(deltas: &[(isize, isize); 8]) -> [Vec<Square>; 64] {
    let mut targets: [Vec<Square>; 64] = std::array::from_fn(|_| Vec::new());
    for (idx, slot) in targets.iter_mut().enumerate() {
        let from = Square::from_index(idx);
        for &(dr, df) in deltas {
            if let Some(to) = from.offset(dr, df) {
                slot.push(to);
            }
        }
    }
    targets
}

/// Knight destination squares per square, in fixed delta order
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| build_targets(&KNIGHT_DELTAS));

/// King destination squares per square, in fixed delta order
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| build_targets(&KING_DELTAS));
