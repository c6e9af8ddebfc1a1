//! Negamax alpha-beta search with a fail-hard window.

use super::super::eval::EvalWeights;
use super::super::{Board, Color};
use super::{SearchResult, DRAW_SCORE, INFINITY, MATE_SCORE};

pub(crate) struct SearchContext<'a> {
    board: &'a mut Board,
    weights: &'a EvalWeights,
    nodes: u64,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(board: &'a mut Board, weights: &'a EvalWeights) -> Self {
        SearchContext {
            board,
            weights,
            nodes: 0,
        }
    }

    /// Root search: like an interior node, but tracks which move produced
    /// the best score. Ties keep the first-encountered move.
    pub(crate) fn search_root(&mut self, color: Color, depth: u32) -> SearchResult {
        self.nodes = 1;

        let moves = self.board.legal_moves(color);
        if moves.is_empty() {
            let score = if self.board.in_check(color) {
                -(MATE_SCORE + depth as i32)
            } else {
                DRAW_SCORE
            };
            return SearchResult {
                best_move: None,
                score,
                nodes: self.nodes,
            };
        }

        let mut best_move = None;
        let mut best = -INFINITY;
        let mut alpha = -INFINITY;
        let beta = INFINITY;

        for &mv in &moves {
            let info = self.board.make_move(mv);
            let score = -self.negamax(color.opponent(), depth - 1, -beta, -alpha);
            self.board.unmake_move(mv, info);

            if score > best {
                best = score;
                best_move = Some(mv);
            }
            if best > alpha {
                alpha = best;
            }
        }

        SearchResult {
            best_move,
            score: best,
            nodes: self.nodes,
        }
    }

    /// Fail-hard negamax: returns a value clamped to the (alpha, beta)
    /// window. The evaluation sign flips with the side to move.
    fn negamax(&mut self, color: Color, depth: u32, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return self.board.evaluate_with(self.weights) * color.sign();
        }

        let moves = self.board.legal_moves(color);
        if moves.is_empty() {
            // Deeper remaining depth means the mate was reached sooner,
            // so closer mates outscore farther ones.
            return if self.board.in_check(color) {
                -(MATE_SCORE + depth as i32)
            } else {
                DRAW_SCORE
            };
        }

        for &mv in &moves {
            let info = self.board.make_move(mv);
            let score = -self.negamax(color.opponent(), depth - 1, -beta, -alpha);
            self.board.unmake_move(mv, info);

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}
