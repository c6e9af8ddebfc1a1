//! Search reporting.

use super::super::Move;

/// Summary of a completed search, handed to a [`SearchLogger`].
pub struct SearchInfo {
    pub depth: u32,
    pub score: i32,
    pub nodes: u64,
    pub nps: u64,
    pub time_ms: u128,
    pub best_move: Option<Move>,
}

/// Sink for search reports. Front ends implement this to surface engine
/// output however they like.
pub trait SearchLogger {
    fn info(&self, info: &SearchInfo);
}

/// Logger that prints one line per search to stdout.
pub struct StdoutLogger;

impl SearchLogger for StdoutLogger {
    fn info(&self, info: &SearchInfo) {
        let best = info
            .best_move
            .map_or_else(|| "(none)".to_string(), |mv| mv.to_string());
        println!(
            "info depth {} score cp {} nodes {} nps {} time {} bestmove {}",
            info.depth, info.score, info.nodes, info.nps, info.time_ms, best
        );
    }
}
