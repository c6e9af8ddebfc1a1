//! Perft: legal-move tree node counting for move generator validation.

use super::Board;

impl Board {
    /// Count leaf nodes of the legal move tree to the given depth.
    ///
    /// For this rule set (double pawn push, no castling / en passant /
    /// promotion) the counts from the starting position match standard
    /// chess through depth 3: 20, 400, 8902.
    #[must_use]
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for &mv in &moves {
            let info = self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.unmake_move(mv, info);
        }
        nodes
    }
}
