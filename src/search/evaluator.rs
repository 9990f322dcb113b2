//! Position evaluation for the tree searches.
//!
//! Both evaluators score from the point of view of a designated maximizing
//! player and only look at the outcome: terminal positions score by who
//! won, everything else (including positions cut off by a depth limit)
//! scores 0.

use crate::games::tictactoe::{Board, GameStatus, Player};

/// Base magnitude of a win for [`DepthAwareEvaluator`].
///
/// A search never runs deeper than nine plies, so `WIN_SCORE - ply` is
/// always positive.
pub const WIN_SCORE: i32 = 10;

/// Scores a board for the search.
pub trait Evaluator {
    /// Score `board` for `maximizer`, reached `ply` half-moves below the
    /// search root.
    fn evaluate(&self, board: &Board, maximizer: Player, ply: u32) -> i32;
}

/// +1 for a win, -1 for a loss, 0 otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticEvaluator;

impl Evaluator for StaticEvaluator {
    fn evaluate(&self, board: &Board, maximizer: Player, _ply: u32) -> i32 {
        match board.status() {
            GameStatus::Won(winner) if winner == maximizer => 1,
            GameStatus::Won(_) => -1,
            GameStatus::Draw | GameStatus::InProgress => 0,
        }
    }
}

/// Prefers quick wins and slow losses.
///
/// A win `ply` half-moves below the root scores `WIN_SCORE - ply`, a loss
/// the negation of that, a draw or unresolved position 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthAwareEvaluator;

impl Evaluator for DepthAwareEvaluator {
    fn evaluate(&self, board: &Board, maximizer: Player, ply: u32) -> i32 {
        let magnitude = WIN_SCORE - ply.min(WIN_SCORE as u32 - 1) as i32;
        match board.status() {
            GameStatus::Won(winner) if winner == maximizer => magnitude,
            GameStatus::Won(_) => -magnitude,
            GameStatus::Draw | GameStatus::InProgress => 0,
        }
    }
}
