//! Tests for move selection.
//!
//! The exhaustive tests walk every position reachable from the blank board
//! and check that alpha-beta agrees with plain minimax on both the chosen
//! move and the root score.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tictactoe_search::{
    AlphaBeta, Board, CELL_COUNT, DepthAwareEvaluator, DepthLimit, Evaluator, GameStatus, Minimax,
    RandomStrategy, Square, StaticEvaluator, Strategy, play_alpha_beta, play_alpha_beta_advanced, play_minimax,
    play_random, run_series,
};

/// Every distinct position reachable by legal play, finished ones included.
fn reachable_positions() -> Vec<Board> {
    fn walk(board: &Board, seen: &mut HashSet<[Square; CELL_COUNT]>, out: &mut Vec<Board>) {
        if !seen.insert(*board.squares()) {
            return;
        }
        out.push(board.clone());
        if board.is_over() {
            return;
        }
        for &index in board.legal_moves() {
            let mut child = board.clone();
            assert!(child.apply_move(index));
            walk(&child, seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(&Board::new(), &mut seen, &mut out);
    out
}

fn assert_pruning_preserves_choice<E: Evaluator + Copy>(evaluator: E, depth: DepthLimit) {
    let positions = reachable_positions();
    let mut compared = 0;

    for board in positions.iter().filter(|b| !b.is_over()) {
        let full = Minimax::new(evaluator, depth).select_move(board).unwrap();
        let pruned = AlphaBeta::new(evaluator, depth).select_move(board).unwrap();

        assert_eq!(
            (pruned.index(), pruned.score()),
            (full.index(), full.score()),
            "alpha-beta disagrees with minimax at depth {depth} on\n{board}"
        );
        assert!(pruned.nodes() <= full.nodes());
        compared += 1;
    }

    assert_eq!(compared, 4520);
}

#[test]
fn test_reachable_position_count() {
    let positions = reachable_positions();
    assert_eq!(positions.len(), 5478);
    assert_eq!(positions.iter().filter(|b| b.is_over()).count(), 958);
}

#[test]
fn test_alpha_beta_matches_minimax_everywhere() {
    assert_pruning_preserves_choice(StaticEvaluator, DepthLimit::Unlimited);
}

#[test]
fn test_advanced_alpha_beta_matches_minimax_everywhere() {
    assert_pruning_preserves_choice(DepthAwareEvaluator, DepthLimit::Unlimited);
}

#[test]
fn test_alpha_beta_matches_minimax_with_depth_limit() {
    assert_pruning_preserves_choice(StaticEvaluator, DepthLimit::Plies(2));
    assert_pruning_preserves_choice(DepthAwareEvaluator, DepthLimit::Plies(3));
}

#[test]
fn test_search_leaves_board_untouched() {
    let board = Board::from_moves(&[4, 0]).unwrap();
    let before = board.clone();
    Minimax::new(StaticEvaluator, None).select_move(&board).unwrap();
    AlphaBeta::advanced(None).select_move(&board).unwrap();
    assert_eq!(board, before);
}

/// X (to move) can win at 8 or block O's threat at 7; blocking only draws.
#[test]
fn test_winning_beats_blocking() {
    let start = Board::from_moves(&[2, 1, 5, 4]).unwrap();

    for play in [play_minimax, play_alpha_beta, play_alpha_beta_advanced] {
        let mut board = start.clone();
        let outcome = play(&mut board, None).unwrap();
        assert_eq!(outcome.index(), 8);
        assert_eq!(board.status(), GameStatus::Won(tictactoe_search::Player::X));
    }
}

/// X: 0, 4   O: 1   O to move. X threatens 8 and wins whatever O does,
/// but blocking pushes the loss from ply 2 to ply 4.
#[test]
fn test_advanced_delays_certain_loss() {
    let board = Board::from_moves(&[0, 1, 4]).unwrap();

    let advanced = AlphaBeta::advanced(None).select_move(&board).unwrap();
    assert_eq!(advanced.index(), 8);
    assert_eq!(advanced.score(), -6);

    // Win/loss scoring sees every move as an equal loss and takes the lowest.
    let plain = AlphaBeta::plain(None).select_move(&board).unwrap();
    assert_eq!(plain.index(), 2);
    assert_eq!(plain.score(), -1);
}

#[test]
fn test_perfect_play_never_loses_to_random() {
    let mut perfect = AlphaBeta::advanced(None);
    let mut random = RandomStrategy::with_seed(2024);
    let as_x = run_series(30, &mut perfect, &mut random).unwrap();
    assert_eq!(as_x.o_wins, 0);

    let as_o = run_series(30, &mut random, &mut perfect).unwrap();
    assert_eq!(as_o.x_wins, 0);
}

#[test]
fn test_random_is_roughly_uniform() {
    let board = Board::from_moves(&[4, 0]).unwrap();
    let legal: Vec<usize> = board.legal_moves().iter().copied().collect();
    let mut counts = [0usize; CELL_COUNT];

    let mut strategy = RandomStrategy::with_seed(5);
    let samples = 7_000;
    for _ in 0..samples {
        let index = strategy.select_move(&board).unwrap().index();
        assert!(legal.contains(&index), "illegal index {index}");
        counts[index] += 1;
    }

    // 7 legal moves, 1000 expected each; the bounds are about 6 sigma wide.
    for &index in &legal {
        assert!((800..=1200).contains(&counts[index]), "{index}: {}", counts[index]);
    }
    assert_eq!(counts[4] + counts[0], 0);
}

#[test]
fn test_play_random_applies_one_legal_move() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..50 {
        let moves: Vec<usize> = (0..rng.random_range(0..5)).map(|_| rng.random_range(0..9)).collect();
        let mut board = Board::new();
        for index in moves {
            board.apply_move(index);
        }
        if board.is_over() {
            continue;
        }
        let before = board.move_count();
        let outcome = play_random(&mut board).unwrap();
        assert_eq!(board.move_count(), before + 1);
        assert_ne!(board.square(outcome.index()), Some(Square::Empty));
    }
}

/// X: 0, 1   O: 3, 4   X to move, loaded from TOML rather than replayed.
#[test]
fn test_search_decoded_board() {
    let text = r#"
        squares = [{ Occupied = "X" }, { Occupied = "X" }, "Empty", { Occupied = "O" }, { Occupied = "O" }, "Empty", "Empty", "Empty", "Empty"]
        turn = "X"
        winner = "Empty"
        move_count = 4
        game_over = false
        available = [2, 5, 6, 7, 8]
    "#;
    let board: Board = toml::from_str(text).unwrap();
    assert_eq!(board, Board::from_moves(&[0, 3, 1, 4]).unwrap());

    let full = Minimax::new(StaticEvaluator, None).select_move(&board).unwrap();
    let pruned = AlphaBeta::advanced(None).select_move(&board).unwrap();
    assert_eq!(full.index(), 2);
    assert_eq!(pruned.index(), 2);
}
