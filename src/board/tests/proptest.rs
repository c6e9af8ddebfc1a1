//! Property-based tests using proptest.

use proptest::prelude::*;

use crate::board::{find_best_move, Board, Move, UnmakeInfo};

/// Strategy to generate a random move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play random legal moves, returning the walked history
fn random_walk(board: &mut Board, seed: u64, num_moves: usize) -> Vec<(Move, UnmakeInfo)> {
    use rand::prelude::*;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut history = Vec::new();
    for _ in 0..num_moves {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let idx = rng.gen_range(0..moves.len());
        let mv = moves[idx];
        let info = board.make_move(mv);
        history.push((mv, info));
    }
    history
}

proptest! {
    /// Property: make_move followed by unmake_move restores board state
    /// exactly, through arbitrary random games
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let initial = board.clone();
        let initial_fen = board.to_fen();

        let mut history = random_walk(&mut board, seed, num_moves);
        while let Some((mv, info)) = history.pop() {
            board.unmake_move(mv, info);
        }

        prop_assert_eq!(board.to_fen(), initial_fen);
        prop_assert_eq!(board, initial);
    }

    /// Property: no legal move ever leaves the mover's own king attacked
    #[test]
    fn prop_legal_moves_keep_king_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        random_walk(&mut board, seed, num_moves);

        let side = board.side_to_move();
        for &mv in &board.generate_moves() {
            let info = board.make_move(mv);
            prop_assert!(!board.in_check(side), "move {} leaves {} in check", mv, side);
            board.unmake_move(mv, info);
        }
    }

    /// Property: search never disturbs the position it was given
    #[test]
    fn prop_search_is_pure(seed in seed_strategy(), num_moves in 1..=12usize, depth in 1..=2u32) {
        let mut board = Board::new();
        random_walk(&mut board, seed, num_moves);

        let before = board.clone();
        let side = board.side_to_move();
        let _ = find_best_move(&mut board, side, depth);
        prop_assert_eq!(board, before);
    }

    /// Property: FEN round-trips through arbitrary reachable positions
    #[test]
    fn prop_fen_round_trip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        random_walk(&mut board, seed, num_moves);

        let fen = board.to_fen();
        let parsed = Board::from_fen(&fen).expect("engine-produced FEN parses");
        prop_assert_eq!(parsed.to_fen(), fen);
        prop_assert_eq!(parsed, board);
    }

    /// Property: evaluation is a pure function of board state
    #[test]
    fn prop_eval_is_deterministic(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        random_walk(&mut board, seed, num_moves);

        let before = board.clone();
        prop_assert_eq!(board.evaluate(), board.evaluate());
        prop_assert_eq!(board, before);
    }
}
