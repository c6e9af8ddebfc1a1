//! Search module implementing negamax with alpha-beta pruning.
//!
//! The search is synchronous and blocking: it runs to completion on the
//! caller's thread, mutating the board through make/unmake pairs and
//! leaving it bit-identical on return. Depth is the only resource bound;
//! there is no time management and no cancellation.

mod alphabeta;
mod log;

use std::time::Instant;

pub use log::{SearchInfo, SearchLogger, StdoutLogger};

use super::eval::EvalWeights;
use super::{Board, Color, Move};
use alphabeta::SearchContext;

/// Base score for checkmate. Mate scores are biased by remaining depth so
/// that closer mates score higher than farther ones.
pub(crate) const MATE_SCORE: i32 = 100_000;

/// Score returned for stalemated (drawn) lines, overriding material
pub(crate) const DRAW_SCORE: i32 = 0;

/// Sentinel outside every reachable score
pub(crate) const INFINITY: i32 = 1_000_000;

/// Result of a search: the chosen move, its score, and the node count.
///
/// The score is from the searching side's perspective (positive is good
/// for the side the search was asked to move). `best_move` is `None` only
/// when the position has no legal moves.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub nodes: u64,
}

/// Find the best move for `color` at the given depth, with default
/// evaluation weights and no logging.
///
/// `depth` is in plies and must be at least 1. The board is mutated and
/// fully reverted during the search; violating that would corrupt
/// subsequent play, so it is treated as a hard invariant, not an
/// optimization.
///
/// # Panics
///
/// Panics if `depth` is 0.
#[must_use]
pub fn find_best_move(board: &mut Board, color: Color, depth: u32) -> SearchResult {
    find_best_move_with(board, color, depth, &EvalWeights::default(), None)
}

/// Find the best move with explicit evaluation weights and an optional
/// per-search logger.
///
/// Candidate moves are examined in the move generator's deterministic
/// order and ties keep the first-encountered best move, so identical
/// inputs always produce identical results.
#[must_use]
pub fn find_best_move_with(
    board: &mut Board,
    color: Color,
    depth: u32,
    weights: &EvalWeights,
    logger: Option<&dyn SearchLogger>,
) -> SearchResult {
    assert!(depth >= 1, "search depth must be at least 1");
    debug_assert_eq!(
        board.side_to_move(),
        color,
        "search asked to move for the side not on turn"
    );

    let start = Instant::now();
    let mut ctx = SearchContext::new(board, weights);
    let result = ctx.search_root(color, depth);

    if let Some(logger) = logger {
        let elapsed = start.elapsed();
        let time_ms = elapsed.as_millis();
        let nps = if elapsed.as_secs_f64() > 0.0 {
            (result.nodes as f64 / elapsed.as_secs_f64()) as u64
        } else {
            0
        };
        logger.info(&SearchInfo {
            depth,
            score: result.score,
            nodes: result.nodes,
            nps,
            time_ms,
            best_move: result.best_move,
        });
    }

    result
}
